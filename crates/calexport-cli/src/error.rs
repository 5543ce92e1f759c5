//! CLI error types.

use std::fmt;

use calexport_core::DeliveryError;

/// Result type for CLI operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum ExportError {
    /// Configuration error.
    Config(String),
    /// The event description is invalid (bad timestamp, end before start).
    Event(String),
    /// IO error.
    Io(std::io::Error),
    /// Delivery of the finished document failed.
    Delivery(DeliveryError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Event(msg) => write!(f, "invalid event: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Delivery(err) => write!(f, "calendar file could not be generated: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Delivery(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DeliveryError> for ExportError {
    fn from(err: DeliveryError) -> Self {
        Self::Delivery(err)
    }
}
