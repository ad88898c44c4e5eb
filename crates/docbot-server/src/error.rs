//! Server error types.

use crate::routes::FALLBACK_ANSWER;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

/// Errors raised while starting the server or answering a request.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] docbot_config::ConfigError),

    #[error(transparent)]
    Ingest(#[from] docbot_ingest::IngestError),

    #[error("Chain error: {0}")]
    Chain(#[from] docbot_chain::ChainError),

    #[error("Ollama error: {0}")]
    Ollama(#[from] docbot_ollama::OllamaError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Failed to bind {address}: {cause}")]
    Bind {
        address: String,
        #[source]
        cause: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Clients only ever see the fallback answer.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        warn!("Failed to answer question: {}", self);
        (StatusCode::BAD_REQUEST, FALLBACK_ANSWER).into_response()
    }
}
