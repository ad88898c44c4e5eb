//! Ollama-backed implementations of the model seams.

use crate::error::ChainResult;
use crate::model::{ChatModel, Embedder};
use async_trait::async_trait;
use docbot_config::OllamaConfig;
use docbot_core::ChatMessage;
use docbot_ollama::{ChatRequest, ModelOptions, OllamaClient};

/// Embeds text with an Ollama embedding model.
#[derive(Clone)]
pub struct OllamaEmbedder {
    client: OllamaClient,
    model: String,
}

impl OllamaEmbedder {
    pub fn new(client: OllamaClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(client: OllamaClient, config: &OllamaConfig) -> Self {
        Self::new(client, &config.embedding_model)
    }
}

#[async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed(&self, text: &str) -> ChainResult<Vec<f32>> {
        Ok(self.client.embed(&self.model, text).await?)
    }
}

/// Chats with an Ollama model.
#[derive(Clone)]
pub struct OllamaChatModel {
    client: OllamaClient,
    model: String,
    temperature: f32,
}

impl OllamaChatModel {
    pub fn new(client: OllamaClient, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }
}

#[async_trait]
impl ChatModel for OllamaChatModel {
    async fn chat(&self, messages: &[ChatMessage]) -> ChainResult<String> {
        let request = ChatRequest::new(&self.model, messages.to_vec())
            .with_options(ModelOptions::new().with_temperature(self.temperature));

        Ok(self.client.chat(request).await?)
    }
}
