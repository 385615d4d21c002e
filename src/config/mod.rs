//! Configuration module for AgriSense
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AgriPaths;
pub use settings::Settings;
