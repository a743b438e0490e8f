//! Error types for quill-parser

use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while recognizing a request head
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Method token outside the supported set
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Request line is not `METHOD SP target SP version`
    #[error("Invalid request line")]
    InvalidRequestLine,

    /// Version is not `HTTP/<digit>.<digit>`
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// Malformed header line
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A token or header line exceeded the configured length
    #[error("Line too long: exceeds limit of {limit} bytes")]
    LineTooLong { limit: usize },

    /// More header lines than configured
    #[error("Too many headers: exceeds limit of {limit}")]
    TooManyHeaders { limit: usize },

    /// The parser already hit an error and accepts no more input
    #[error("Parser is in the error state")]
    Failed,
}
