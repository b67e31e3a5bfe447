//! Error types and Result alias for logtint
//!
//! The conversion core is total and never fails; errors exist only at the
//! configuration and file I/O boundary.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for logtint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for logtint
#[derive(Debug)]
pub enum Error {
    /// Failed to read a configuration file
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Unknown output format name
    UnknownFormat { name: String },

    /// I/O errors
    Io(std::io::Error),

    /// JSON serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    /// Generic errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load configuration from {}: {}", path.display(), reason)
            }
            Error::UnknownFormat { name } => {
                write!(f, "Unknown output format: {} (expected html, page, or tokens)", name)
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
