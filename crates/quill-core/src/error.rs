//! Error types for quill-core

use quill_parser::ParseError;
use thiserror::Error;

/// Result type alias for quill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message carried by [`Error::MalformedRequest`] when the head never closed
pub const INCOMPLETE_REQUEST: &str = "incomplete HTTP request";

/// Error types for request assembly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input ended before the parser finished the header block
    #[error("{0}")]
    MalformedRequest(String),

    /// Syntax error reported by the parser, passed through unchanged
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Table lookup failed
    #[error("Table not found: {0}")]
    TableNotFound(String),
}

impl Error {
    /// The error raised for input that stops short of end-of-headers
    pub fn incomplete() -> Self {
        Error::MalformedRequest(INCOMPLETE_REQUEST.to_string())
    }

    /// True for both incompleteness and parser syntax errors.
    ///
    /// Either way the bytes did not form a request head; servers typically
    /// answer with a 400.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Error::MalformedRequest(_) | Error::Parse(_))
    }
}
