//! Document parsers for the supported source formats.

mod custom;
mod html;
mod json;
mod pdf;
mod text;
mod xml;

pub use custom::CustomLogicParser;
pub use html::HtmlParser;
pub use json::JsonParser;
pub use pdf::PdfParser;
pub use text::{FallbackTextParser, PlainTextParser};
pub use xml::XmlParser;

use crate::error::{IngestError, IngestResult};
use docbot_core::{Document, DocumentFormat};
use tracing::debug;

/// Trait for document parsers.
///
/// A parser turns the raw bytes of a source into plain text.
pub trait DocumentParser: Send + Sync {
    /// The format this parser handles.
    fn format(&self) -> DocumentFormat;

    /// Extract plain text from raw bytes.
    fn parse(&self, bytes: &[u8]) -> IngestResult<String>;
}

/// Get the parser for a format.
pub fn parser_for(format: DocumentFormat) -> Box<dyn DocumentParser> {
    match format {
        DocumentFormat::Html => Box::new(HtmlParser::new()),
        DocumentFormat::Json => Box::new(JsonParser::new()),
        DocumentFormat::Xml => Box::new(XmlParser::new()),
        DocumentFormat::Text => Box::new(PlainTextParser::new()),
        DocumentFormat::Pdf => Box::new(PdfParser::new()),
        DocumentFormat::Custom => Box::new(CustomLogicParser::new()),
        DocumentFormat::Fallback => Box::new(FallbackTextParser::new()),
    }
}

/// Parse the bytes of a source into a document, picking the parser by suffix.
pub fn parse_document(source: &str, bytes: &[u8]) -> IngestResult<Document> {
    let format = DocumentFormat::from_source(source);
    debug!("Parsing {} as {}", source, format);

    let text = parser_for(format).parse(bytes)?;
    Document::new(source, format, text).map_err(|_| IngestError::parse(format))
}

/// Decode UTF-8, mapping failures to the format's parse error.
pub(crate) fn decode_utf8(format: DocumentFormat, bytes: &[u8]) -> IngestResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        debug!("Invalid UTF-8 in {} source: {}", format, e);
        IngestError::parse(format)
    })
}

/// Reject blank parser output.
pub(crate) fn non_blank(format: DocumentFormat, text: String) -> IngestResult<String> {
    if text.trim().is_empty() {
        debug!("{} parser produced no text", format);
        return Err(IngestError::parse(format));
    }
    Ok(text)
}
