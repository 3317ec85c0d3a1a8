/// Error types for the Meteomatics client library
use thiserror::Error;

/// Main error type for query construction and credential resolution
#[derive(Error, Debug)]
pub enum MeteomaticsError {
    /// Bounding box string could not be parsed
    #[error("Invalid bounding box: {0}")]
    InvalidBoundingBox(String),

    /// Grid step string could not be parsed or was not positive
    #[error("Invalid grid step: {0}")]
    InvalidGridStep(String),

    /// Unknown output format tag
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// No usable username/password from arguments or environment
    #[error("Missing credentials: set METEOMATICS_USERNAME and METEOMATICS_PASSWORD or pass --username/--password")]
    MissingCredentials,
}

/// Type alias for Results using MeteomaticsError
pub type Result<T> = std::result::Result<T, MeteomaticsError>;
