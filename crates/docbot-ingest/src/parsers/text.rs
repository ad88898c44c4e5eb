//! Plain text document parsers.

use super::{decode_utf8, non_blank, DocumentParser};
use crate::error::IngestResult;
use docbot_core::DocumentFormat;

/// Parser for `.txt` sources.
pub struct PlainTextParser;

impl PlainTextParser {
    /// Create a new text parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for PlainTextParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let text = decode_utf8(self.format(), bytes)?;
        non_blank(self.format(), text.to_string())
    }
}

/// Parser for sources with no recognised suffix; reads them as UTF-8 text.
pub struct FallbackTextParser;

impl FallbackTextParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FallbackTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for FallbackTextParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Fallback
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let text = decode_utf8(self.format(), bytes)?;
        non_blank(self.format(), text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_verbatim() {
        let parser = PlainTextParser::new();
        let text = parser
            .parse("This is a plain text file.\nWith multiple lines.\n".as_bytes())
            .unwrap();

        assert_eq!(text, "This is a plain text file.\nWith multiple lines.\n");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = PlainTextParser::new().parse(&[0xff, 0xfe, 0x41]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse plain text content");

        let err = FallbackTextParser::new().parse(&[0xc3, 0x28]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse text content");
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(PlainTextParser::new().parse(b"").is_err());
        assert!(FallbackTextParser::new().parse(b" \n ").is_err());
    }

    #[test]
    fn test_fallback_keeps_unicode() {
        let text = FallbackTextParser::new().parse("日本語 ─ text".as_bytes()).unwrap();
        assert_eq!(text, "日本語 ─ text");
    }
}
