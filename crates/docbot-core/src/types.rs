//! Core domain types for Docbot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Unique identifier for documents.
pub type DocumentId = String;

/// Unique identifier for text segments.
pub type SegmentId = String;

/// Generate a new unique ID.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Hex-encoded SHA-256 of some text.
pub fn content_hash(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Format a document source is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Html,
    Json,
    Xml,
    Text,
    Pdf,
    Custom,
    Fallback,
}

impl DocumentFormat {
    /// Suffixes checked in order; the first match wins.
    const SUFFIXES: [(&'static str, DocumentFormat); 6] = [
        (".html", DocumentFormat::Html),
        (".json", DocumentFormat::Json),
        (".xml", DocumentFormat::Xml),
        (".txt", DocumentFormat::Text),
        (".pdf", DocumentFormat::Pdf),
        (".custom", DocumentFormat::Custom),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Html => "html",
            DocumentFormat::Json => "json",
            DocumentFormat::Xml => "xml",
            DocumentFormat::Text => "text",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Custom => "custom",
            DocumentFormat::Fallback => "fallback",
        }
    }

    /// Detect the format from the literal end of a source string.
    ///
    /// Matching is case-sensitive and looks at the whole string, so
    /// `report.PDF` or `page.html?lang=en` fall through to `Fallback`.
    pub fn from_source(source: &str) -> Self {
        Self::SUFFIXES
            .iter()
            .find(|(suffix, _)| source.ends_with(suffix))
            .map(|(_, format)| *format)
            .unwrap_or(DocumentFormat::Fallback)
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loaded document: plain text plus where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub source: String,
    pub format: DocumentFormat,
    pub text: String,
    pub content_hash: String,
    pub loaded_at: DateTime<Utc>,
}

impl Document {
    /// Create a document. Blank text is rejected.
    pub fn new(
        source: impl Into<String>,
        format: DocumentFormat,
        text: impl Into<String>,
    ) -> crate::Result<Self> {
        let source = source.into();
        let text = text.into();
        if text.trim().is_empty() {
            return Err(crate::Error::BlankDocument(source));
        }

        Ok(Self {
            id: new_id(),
            content_hash: content_hash(&text),
            source,
            format,
            text,
            loaded_at: Utc::now(),
        })
    }
}

/// A piece of document text that is embedded and retrieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSegment {
    pub id: SegmentId,
    pub document_id: DocumentId,
    pub source: String,
    pub index: usize,
    pub text: String,
}

impl TextSegment {
    pub fn new(document: &Document, index: usize, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            document_id: document.id.clone(),
            source: document.source.clone(),
            index,
            text: text.into(),
        }
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single message in a conversation with the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
