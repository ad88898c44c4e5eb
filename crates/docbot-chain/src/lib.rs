//! Docbot Chain - Retrieval-augmented question answering over loaded documents.
//!
//! The chain embeds document segments into an in-memory store, retrieves the
//! segments closest to each question and asks a chat model to answer from
//! them, keeping a bounded window of the conversation.

mod chain;
mod error;
mod memory;
mod model;
mod ollama;
pub mod prompt;
mod retriever;
mod store;

pub use chain::{ChainBuilder, ConversationalRetrievalChain};
pub use error::{ChainError, ChainResult};
pub use memory::ChatMemory;
pub use model::{ChatModel, Embedder};
pub use ollama::{OllamaChatModel, OllamaEmbedder};
pub use retriever::Retriever;
pub use store::{cosine_similarity, EmbeddingStore, ScoredSegment};
