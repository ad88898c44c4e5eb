//! Model seams used by the chain.

use crate::error::ChainResult;
use async_trait::async_trait;
use docbot_core::ChatMessage;

/// Turns text into a vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> ChainResult<Vec<f32>>;
}

/// Answers a conversation with the assistant's next message.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage]) -> ChainResult<String>;
}
