//! Domain error types
//!
//! This module defines the error hierarchy for Scrubber. Errors only surface from the
//! driver side (configuration, file and CSV handling); the classification and masking
//! core never fails.

use thiserror::Error;

/// Main Scrubber error type
#[derive(Debug, Error)]
pub enum ScrubError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input file or input CSV layout errors
    #[error("Input error: {0}")]
    Input(String),

    /// Output file errors
    #[error("Output error: {0}")]
    Output(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Row-level failure details collected during a run
///
/// Row failures never abort a run; they are counted and reported.
#[derive(Debug, Clone)]
pub struct RecordErrorDetail {
    /// 1-based CSV line number, when known
    pub line: Option<u64>,

    /// Error message
    pub message: String,
}

impl RecordErrorDetail {
    /// Creates a new record error detail
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
        }
    }

    /// Sets the CSV line number
    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ScrubError {
    fn from(err: std::io::Error) -> Self {
        ScrubError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScrubError {
    fn from(err: serde_json::Error) -> Self {
        ScrubError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ScrubError {
    fn from(err: toml::de::Error) -> Self {
        ScrubError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for ScrubError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            ScrubError::Io(err.to_string())
        } else {
            ScrubError::Input(format!("CSV error: {err}"))
        }
    }
}
