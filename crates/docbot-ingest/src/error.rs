//! Error types for document loading.

use docbot_core::DocumentFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while loading documents.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request for {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The message is fixed per format; the cause is only logged.
    #[error("Failed to parse {} content", format_label(.format))]
    Parse { format: DocumentFormat },

    #[error("Failed to load document from {location}")]
    Load {
        location: String,
        #[source]
        cause: Box<IngestError>,
    },
}

impl IngestError {
    pub fn parse(format: DocumentFormat) -> Self {
        Self::Parse { format }
    }

    pub fn load(location: impl Into<String>, cause: IngestError) -> Self {
        Self::Load {
            location: location.into(),
            cause: Box::new(cause),
        }
    }
}

fn format_label(format: &DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Html => "HTML",
        DocumentFormat::Json => "JSON",
        DocumentFormat::Xml => "XML",
        DocumentFormat::Text => "plain text",
        DocumentFormat::Pdf => "PDF",
        DocumentFormat::Custom => "custom logic",
        DocumentFormat::Fallback => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages_are_fixed_per_format() {
        let cases = [
            (DocumentFormat::Html, "Failed to parse HTML content"),
            (DocumentFormat::Json, "Failed to parse JSON content"),
            (DocumentFormat::Xml, "Failed to parse XML content"),
            (DocumentFormat::Text, "Failed to parse plain text content"),
            (DocumentFormat::Pdf, "Failed to parse PDF content"),
            (DocumentFormat::Custom, "Failed to parse custom logic content"),
            (DocumentFormat::Fallback, "Failed to parse text content"),
        ];

        for (format, message) in cases {
            assert_eq!(IngestError::parse(format).to_string(), message);
        }
    }

    #[test]
    fn test_load_error_names_source() {
        let err = IngestError::load("https://x.io/a.pdf", IngestError::parse(DocumentFormat::Pdf));
        assert_eq!(err.to_string(), "Failed to load document from https://x.io/a.pdf");

        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "Failed to parse PDF content");
    }
}
