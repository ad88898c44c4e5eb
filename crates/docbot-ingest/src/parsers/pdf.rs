//! PDF document parser.

use super::{non_blank, DocumentParser};
use crate::error::{IngestError, IngestResult};
use docbot_core::DocumentFormat;
use tracing::debug;

/// Parser for PDF files.
pub struct PdfParser;

impl PdfParser {
    /// Create a new PDF parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for PdfParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let content = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            debug!("Failed to extract text from PDF: {}", e);
            IngestError::parse(self.format())
        })?;

        let content = clean_pdf_text(&content);
        debug!("Extracted {} characters from PDF", content.len());

        non_blank(self.format(), content)
    }
}

/// Clean up extracted PDF text.
fn clean_pdf_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        // Collapse runs of empty lines
        .fold(Vec::new(), |mut acc, line| {
            let last_was_empty = acc.last().map(|s: &String| s.is_empty()).unwrap_or(false);
            if !(line.is_empty() && last_was_empty) {
                acc.push(line.to_string());
            }
            acc
        })
        .join("\n")
        // Form feeds mark page breaks
        .replace('\x0C', "\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_pdf_text() {
        let messy = "  Hello  \n\n\n\nWorld  \n\nTest";
        let cleaned = clean_pdf_text(messy);
        assert_eq!(cleaned, "Hello\n\nWorld\n\nTest");
    }

    #[test]
    fn test_not_a_pdf() {
        let err = PdfParser::new().parse(b"plain bytes, no PDF header").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse PDF content");
    }
}
