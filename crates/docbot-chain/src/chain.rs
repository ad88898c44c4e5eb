//! The conversational retrieval chain.

use crate::error::{ChainError, ChainResult};
use crate::memory::ChatMemory;
use crate::model::{ChatModel, Embedder};
use crate::prompt::build_prompt;
use crate::retriever::Retriever;
use crate::store::EmbeddingStore;
use docbot_config::Config;
use docbot_core::{ChatMessage, Document};
use docbot_ingest::{ChunkConfig, Chunker};
use futures_util::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Answers questions from ingested documents, remembering recent turns.
///
/// One memory window is shared by every caller.
pub struct ConversationalRetrievalChain {
    embedder: Arc<dyn Embedder>,
    chat_model: Arc<dyn ChatModel>,
    retriever: Retriever,
    store: EmbeddingStore,
    memory: Mutex<ChatMemory>,
    chunker: Chunker,
    embed_concurrency: usize,
}

impl ConversationalRetrievalChain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Chunk and embed documents into the store.
    ///
    /// Returns the number of segments added.
    pub async fn ingest(&mut self, documents: &[Document]) -> ChainResult<usize> {
        let mut added = 0;

        for document in documents {
            let segments = self.chunker.chunk_document(document);
            debug!("{} split into {} segments", document.source, segments.len());

            let embedder = &self.embedder;
            let vectors: Vec<Vec<f32>> = stream::iter(segments.iter())
                .map(|segment| embedder.embed(&segment.text))
                .buffered(self.embed_concurrency)
                .try_collect()
                .await?;

            for (segment, vector) in segments.into_iter().zip(vectors) {
                self.store.add(segment, vector)?;
                added += 1;
            }
        }

        info!(
            "Ingested {} documents into {} segments",
            documents.len(),
            self.store.len()
        );
        Ok(added)
    }

    /// Answer a question using retrieved segments and the conversation so far.
    pub async fn execute(&self, question: &str) -> ChainResult<String> {
        if question.trim().is_empty() {
            return Err(ChainError::BlankQuestion);
        }

        let segments = self.retriever.retrieve(&self.store, question).await?;
        let prompt = build_prompt(question, &segments);

        // Held across the model call so turns are not interleaved
        let mut memory = self.memory.lock().await;
        memory.add(ChatMessage::user(prompt));

        let answer = self.chat_model.chat(&memory.messages()).await?;
        memory.add(ChatMessage::assistant(answer.clone()));

        Ok(answer)
    }

    /// Messages currently in the memory window, oldest first.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.memory.lock().await.messages()
    }

    /// Forget the conversation so far.
    pub async fn clear_history(&self) {
        self.memory.lock().await.clear();
    }

    /// Number of embedded segments.
    pub fn segment_count(&self) -> usize {
        self.store.len()
    }
}

/// Builder for [`ConversationalRetrievalChain`].
pub struct ChainBuilder {
    embedder: Option<Arc<dyn Embedder>>,
    chat_model: Option<Arc<dyn ChatModel>>,
    store: Option<EmbeddingStore>,
    max_results: usize,
    min_score: f32,
    memory_messages: usize,
    chunker: Chunker,
    embed_concurrency: usize,
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            embedder: None,
            chat_model: None,
            store: None,
            max_results: 3,
            min_score: 0.5,
            memory_messages: 10,
            chunker: Chunker::default_chunker(),
            embed_concurrency: 4,
        }
    }

    /// Take retrieval, memory and chunking settings from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .max_results(config.retrieval.max_results)
            .min_score(config.retrieval.min_score)
            .memory_messages(config.retrieval.memory_messages)
            .embed_concurrency(config.retrieval.embed_concurrency)
            .chunk_config(ChunkConfig::from(&config.chunking))
    }

    pub fn embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn chat_model(mut self, chat_model: Arc<dyn ChatModel>) -> Self {
        self.chat_model = Some(chat_model);
        self
    }

    pub fn store(mut self, store: EmbeddingStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn memory_messages(mut self, memory_messages: usize) -> Self {
        self.memory_messages = memory_messages;
        self
    }

    pub fn chunk_config(mut self, config: ChunkConfig) -> Self {
        self.chunker = Chunker::new(config);
        self
    }

    pub fn embed_concurrency(mut self, embed_concurrency: usize) -> Self {
        self.embed_concurrency = embed_concurrency.max(1);
        self
    }

    pub fn build(self) -> ChainResult<ConversationalRetrievalChain> {
        let embedder = self
            .embedder
            .ok_or(ChainError::MissingComponent("embedder"))?;
        let chat_model = self
            .chat_model
            .ok_or(ChainError::MissingComponent("chat model"))?;

        Ok(ConversationalRetrievalChain {
            retriever: Retriever::new(embedder.clone(), self.max_results, self.min_score),
            embedder,
            chat_model,
            store: self.store.unwrap_or_default(),
            memory: Mutex::new(ChatMemory::with_max_messages(self.memory_messages)),
            chunker: self.chunker,
            embed_concurrency: self.embed_concurrency,
        })
    }
}
