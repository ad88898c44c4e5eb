//! XML document parser.

use super::{decode_utf8, non_blank, DocumentParser};
use crate::error::{IngestError, IngestResult};
use docbot_core::DocumentFormat;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

/// Parser for XML sources; yields the text content of the root element.
pub struct XmlParser;

impl XmlParser {
    /// Create a new XML parser.
    pub fn new() -> Self {
        Self
    }

    /// Concatenate all text and CDATA nested inside the root element.
    fn root_text_content(xml: &str) -> Result<String, String> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut depth: usize = 0;
        let mut saw_root = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(_)) => {
                    if depth == 0 && saw_root {
                        return Err("more than one root element".to_string());
                    }
                    depth += 1;
                    saw_root = true;
                }
                Ok(Event::End(_)) => {
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Empty(_)) => {
                    if depth == 0 {
                        if saw_root {
                            return Err("more than one root element".to_string());
                        }
                        saw_root = true;
                    }
                }
                Ok(Event::Text(e)) => {
                    if depth > 0 {
                        let unescaped = e.unescape().map_err(|e| e.to_string())?;
                        text.push_str(&unescaped);
                    } else if !e.iter().all(u8::is_ascii_whitespace) {
                        return Err("text outside the root element".to_string());
                    }
                }
                Ok(Event::CData(e)) => {
                    if depth > 0 {
                        text.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, processing instructions, doctype
                Ok(_) => {}
                Err(e) => {
                    return Err(format!(
                        "error at position {}: {}",
                        reader.buffer_position(),
                        e
                    ))
                }
            }
        }

        if !saw_root {
            return Err("no root element".to_string());
        }
        if depth != 0 {
            return Err("unclosed element at end of input".to_string());
        }

        Ok(text)
    }
}

impl Default for XmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for XmlParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Xml
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let xml = decode_utf8(self.format(), bytes)?;

        let text = Self::root_text_content(xml).map_err(|message| {
            debug!("Invalid XML: {}", message);
            IngestError::parse(self.format())
        })?;

        non_blank(self.format(), text)
    }
}
