//! Error types for the retrieval chain.

use thiserror::Error;

/// Errors raised while ingesting documents or answering questions.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Question must not be blank")]
    BlankQuestion,

    #[error("Chain is missing its {0}")]
    MissingComponent(&'static str),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// For [`Embedder`](crate::Embedder) implementations not backed by Ollama.
    #[error("Embedding failed: {0}")]
    Embedding(String),

    /// For [`ChatModel`](crate::ChatModel) implementations not backed by Ollama.
    #[error("Chat model failed: {0}")]
    Model(String),

    #[error("Ollama error: {0}")]
    Ollama(#[from] docbot_ollama::OllamaError),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
