//! Error types for the templates portal

use thiserror::Error;

/// Main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    /// Entered code does not match the configured secret
    #[error("Invalid access code")]
    InvalidAccessCode,

    /// Template key is not part of the known template set
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Two descriptors share the same id
    #[error("Duplicate template id: {0}")]
    DuplicateTemplate(String),

    /// Creation date is not an ISO `YYYY-MM-DD` string
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration value rejected during validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Base URL for the query echo could not be parsed
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias using PortalError
pub type PortalResult<T> = Result<T, PortalError>;
