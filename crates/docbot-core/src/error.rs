//! Error types for Docbot's domain types.

use thiserror::Error;

/// Errors raised when constructing domain values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Blank document text from {0}")]
    BlankDocument(String),
}

/// Result type alias using Docbot's Error.
pub type Result<T> = std::result::Result<T, Error>;
