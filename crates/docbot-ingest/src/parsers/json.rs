//! JSON document parser.

use super::{decode_utf8, non_blank, DocumentParser};
use crate::error::{IngestError, IngestResult};
use docbot_core::DocumentFormat;
use serde_json::{Map, Value};
use tracing::debug;

/// Parser for JSON sources.
///
/// The top level must be an object. It is rendered as a flat map string,
/// `{name=docbot, tags=[a, b], owner={id=7}}`, keeping key order.
pub struct JsonParser;

impl JsonParser {
    /// Create a new JSON parser.
    pub fn new() -> Self {
        Self
    }

    fn render_value(value: &Value, out: &mut String) {
        match value {
            Value::Object(map) => Self::render_map(map, out),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    Self::render_value(item, out);
                }
                out.push(']');
            }
            Value::String(s) => out.push_str(s),
            Value::Number(n) => out.push_str(&n.to_string()),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Null => out.push_str("null"),
        }
    }

    fn render_map(map: &Map<String, Value>, out: &mut String) {
        out.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push('=');
            Self::render_value(value, out);
        }
        out.push('}');
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let content = decode_utf8(self.format(), bytes)?;

        let map: Map<String, Value> = serde_json::from_str(content).map_err(|e| {
            debug!("Invalid JSON object: {}", e);
            IngestError::parse(self.format())
        })?;

        let mut text = String::new();
        Self::render_map(&map, &mut text);
        non_blank(self.format(), text)
    }
}
