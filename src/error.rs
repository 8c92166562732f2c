use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing the popularity report
#[derive(Error, Debug)]
pub enum ReportError {
    /// A required configuration key is missing or invalid
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The portal answered with a non-success status or a failed action envelope
    #[error("portal request failed ({status}): {message}")]
    Fetch { status: u16, message: String },

    /// Network-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The portal returned a body that does not match the expected shape
    #[error("failed to decode portal response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The report file could not be written
    #[error("failed to write report to {}: {message}", path.display())]
    FileWrite { path: PathBuf, message: String },
}

impl ReportError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error from an HTTP status and body
    pub fn fetch<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Fetch {
            status,
            message: message.into(),
        }
    }

    /// Create a new file-write error for the given destination path
    pub fn file_write<P: Into<PathBuf>, E: std::fmt::Display>(path: P, source: E) -> Self {
        Self::FileWrite {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
