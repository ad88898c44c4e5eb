//! Error types for Ollama operations.

use thiserror::Error;

/// What can go wrong talking to Ollama.
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Ollama did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    /// Includes the hint to pull the model.
    #[error("Model {model} is not available, pull it with 'ollama pull {model}'")]
    ModelNotFound { model: String },

    #[error("Cannot reach Ollama at {host}, is 'ollama serve' running?")]
    ServerNotRunning { host: String },

    #[error("Ollama returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// A 200 response without an embedding or message.
    #[error("Model {model} returned nothing")]
    EmptyResponse { model: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for Ollama operations.
pub type OllamaResult<T> = Result<T, OllamaError>;
