//! User settings for AgriSense
//!
//! Only preferences are persisted here: display language, TUI tick rate,
//! and the logging toggle. Wizard progress is never written to disk.

use serde::{Deserialize, Serialize};

use crate::error::AgriError;
use crate::locale::Locale;

use super::paths::AgriPaths;

/// User settings for AgriSense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Preferred display language
    #[serde(default)]
    pub locale: Locale,

    /// TUI tick interval in milliseconds; drives the progress animation
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether TUI sessions write a log file
    #[serde(default)]
    pub log_to_file: bool,

    /// Log level filter when logging is enabled
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: Locale::default(),
            tick_rate_ms: default_tick_rate_ms(),
            log_to_file: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AgriPaths) -> Result<Self, AgriError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AgriError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| AgriError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AgriPaths) -> Result<(), AgriError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AgriError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| AgriError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
