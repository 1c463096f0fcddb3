// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the control engine.

use std::fmt;

/// Result type alias for control-engine operations.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Main error type for the control engine.
#[derive(Debug)]
pub enum ControlError {
    /// Error reading frames from a landmark source.
    SourceError(String),
    /// Malformed landmark data in a replay stream.
    ParseError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceError(msg) => write!(f, "Source error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ControlError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
