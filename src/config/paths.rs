//! Path management for AgriSense
//!
//! Resolves where settings and log files live.
//!
//! ## Path Resolution Order
//!
//! 1. `AGRISENSE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (Linux: `~/.config/agrisense`, macOS: `~/Library/Application
//!    Support/agrisense`, Windows: `%APPDATA%\agrisense`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AgriError;

/// Manages all paths used by AgriSense
#[derive(Debug, Clone)]
pub struct AgriPaths {
    /// Base directory for all AgriSense data
    base_dir: PathBuf,
}

impl AgriPaths {
    /// Create a new AgriPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, AgriError> {
        let base_dir = if let Ok(custom) = std::env::var("AGRISENSE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "agrisense").ok_or_else(|| {
                AgriError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create AgriPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory TUI-mode log files are written to
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), AgriError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AgriError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.logs_dir())
            .map_err(|e| AgriError::Io(format!("Failed to create logs directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgriPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.logs_dir(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AgriPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.logs_dir().exists());
    }
}
