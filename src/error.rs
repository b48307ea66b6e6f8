//! Error handling for the weather station crate.

use std::path::PathBuf;

/// A specialized `Result` type for weather station operations.
pub type Result<T> = std::result::Result<T, StationError>;

/// The main error type for weather station operations.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sensor source does not exist
    #[error("Temperature file not found: {}", .0.display())]
    SensorUnavailable(PathBuf),

    /// The sensor produced something that is not a temperature
    #[error("Invalid sensor reading: {0}")]
    InvalidReading(String),

    /// Record store operation failed
    #[error("Store error: {0}")]
    Store(String),

    /// Dashboard fetch failed
    #[error("{0}")]
    Fetch(String),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StationError {
    /// Create a new invalid reading error
    pub fn invalid_reading(msg: impl Into<String>) -> Self {
        Self::InvalidReading(msg.into())
    }

    /// Create a new store error
    pub fn store_error(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a new fetch error
    pub fn fetch_error(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<libsql::Error> for StationError {
    fn from(err: libsql::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<reqwest::Error> for StationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}
