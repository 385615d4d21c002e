//! Reusable TUI widgets

pub mod progress;
