//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the content catalog.

pub mod faq;
pub mod guides;

pub use faq::handle_faq_command;
pub use guides::{handle_guides_command, handle_show_command};
