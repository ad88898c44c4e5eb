//! Parser for `.custom` sources.

use super::{decode_utf8, non_blank, DocumentParser};
use crate::error::IngestResult;
use docbot_core::DocumentFormat;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Site-specific parsing hook. The stock rule squeezes every run of
/// whitespace, newlines included, down to a single space.
pub struct CustomLogicParser;

impl CustomLogicParser {
    /// Create a new custom parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CustomLogicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for CustomLogicParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Custom
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let content = decode_utf8(self.format(), bytes)?;
        non_blank(self.format(), WHITESPACE.replace_all(content, " ").into_owned())
    }
}
