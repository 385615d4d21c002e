//! Terminal User Interface module
//!
//! This module provides the full-screen interface for AgriSense using
//! ratatui. It includes the home guide list, the step-by-step guide
//! screen, the profile screen, and the overlay dialogs.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
