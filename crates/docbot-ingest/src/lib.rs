//! Docbot Ingest - Turning configured sources into plain-text documents.
//!
//! This crate provides:
//! - One parser per supported format, picked by the source's suffix
//! - A loader that reads sources from the web or the local disk
//! - Content chunking for retrieval

mod chunker;
mod error;
mod loader;
pub mod parsers;

pub use chunker::{ChunkConfig, Chunker};
pub use error::{IngestError, IngestResult};
pub use loader::DocumentLoader;
pub use parsers::{parse_document, parser_for, DocumentParser};
