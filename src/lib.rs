//! AgriSense - Bilingual farming guides for the terminal
//!
//! This library provides the core functionality for the AgriSense
//! application: step-by-step agricultural guides (harvest timing, pest
//! management, soil moisture, weed control, and more) in English and
//! Tagalog, driven by a guided step wizard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `content`: The validated guide catalog and FAQ content
//! - `error`: Custom error types
//! - `locale`: Supported display languages and the active-locale selector
//! - `wizard`: The step wizard controller, completion gate, and guide session
//! - `profile`: Support contact deep links
//! - `cli`: Plain-text command handlers
//! - `tui`: The full-screen ratatui interface
//!
//! # Example
//!
//! ```rust
//! use agrisense::content::Catalog;
//! use agrisense::locale::Locale;
//! use agrisense::wizard::GuideSession;
//!
//! let catalog = Catalog::load().unwrap();
//! let guide = catalog.find("harvest-timing").unwrap();
//! let session = GuideSession::new(guide, Locale::En);
//! assert_eq!(session.wizard().progress_percent(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod locale;
pub mod logging;
pub mod profile;
pub mod tui;
pub mod wizard;

pub use error::{AgriError, AgriResult};
