//! Custom error types for AgriSense
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for AgriSense operations
#[derive(Error, Debug)]
pub enum AgriError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Catalog authoring defects detected at load time
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A step index outside the guide's `[0, step_count)` range
    #[error("Invalid step index {index} for guide '{guide}' with {step_count} steps")]
    InvalidStepIndex {
        guide: &'static str,
        index: usize,
        step_count: usize,
    },

    /// An unsupported locale code
    #[error("Locale not supported: {code}")]
    LocaleNotFound { code: String },

    /// A catalog lookup miss for a locale/content-key pair
    #[error("Content not found for guide '{guide}' ({locale}): {content_key}")]
    ContentNotFound {
        guide: &'static str,
        locale: &'static str,
        content_key: String,
    },

    /// An unknown guide identifier
    #[error("Guide not found: {0}")]
    GuideNotFound(String),
}

impl AgriError {
    /// Create an invalid-step-index error
    pub fn invalid_step(guide: &'static str, index: usize, step_count: usize) -> Self {
        Self::InvalidStepIndex {
            guide,
            index,
            step_count,
        }
    }

    /// Create a locale-not-found error
    pub fn locale_not_found(code: impl Into<String>) -> Self {
        Self::LocaleNotFound { code: code.into() }
    }

    /// Create a content-not-found error
    pub fn content_not_found(
        guide: &'static str,
        locale: &'static str,
        content_key: impl Into<String>,
    ) -> Self {
        Self::ContentNotFound {
            guide,
            locale,
            content_key: content_key.into(),
        }
    }

    /// Check if this is an invalid-step-index error
    pub fn is_invalid_step(&self) -> bool {
        matches!(self, Self::InvalidStepIndex { .. })
    }

    /// Check if this is a content-lookup miss
    pub fn is_content_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AgriError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AgriError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for AgriSense operations
pub type AgriResult<T> = Result<T, AgriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AgriError::Catalog("step count mismatch".into());
        assert_eq!(err.to_string(), "Catalog error: step count mismatch");
    }

    #[test]
    fn test_invalid_step_error() {
        let err = AgriError::invalid_step("harvest-timing", 7, 5);
        assert_eq!(
            err.to_string(),
            "Invalid step index 7 for guide 'harvest-timing' with 5 steps"
        );
        assert!(err.is_invalid_step());
    }

    #[test]
    fn test_content_not_found_error() {
        let err = AgriError::content_not_found("soil-moisture", "tl", "soil.check");
        assert_eq!(
            err.to_string(),
            "Content not found for guide 'soil-moisture' (tl): soil.check"
        );
        assert!(err.is_content_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let agri_err: AgriError = io_err.into();
        assert!(matches!(agri_err, AgriError::Io(_)));
    }
}
