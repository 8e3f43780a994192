//! Crate error type
//!
//! The simulation itself never fails; errors only come from loading level or
//! tuning data and from the command line.

/// Errors raised while loading external data.
#[derive(Debug)]
pub enum NeoDashError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// Tuning values that would break the simulation.
    InvalidTuning(String),
    /// Unusable command line argument.
    InvalidArgument(String),
}

impl std::fmt::Display for NeoDashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NeoDashError::Io(e) => write!(f, "IO error: {e}"),
            NeoDashError::Json(e) => write!(f, "JSON error: {e}"),
            NeoDashError::InvalidTuning(msg) => write!(f, "invalid tuning: {msg}"),
            NeoDashError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for NeoDashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NeoDashError::Io(e) => Some(e),
            NeoDashError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NeoDashError {
    fn from(e: std::io::Error) -> Self {
        NeoDashError::Io(e)
    }
}

impl From<serde_json::Error> for NeoDashError {
    fn from(e: serde_json::Error) -> Self {
        NeoDashError::Json(e)
    }
}
