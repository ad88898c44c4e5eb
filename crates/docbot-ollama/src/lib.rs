//! Docbot Ollama - Ollama integration for embeddings and chat.
//!
//! This crate provides an async client for the parts of Ollama's API that
//! Docbot needs: model discovery, embedding generation and chat completion.

mod client;
mod error;
mod types;

pub use client::OllamaClient;
pub use error::{OllamaError, OllamaResult};
pub use types::*;
