//! HTML document parser.

use super::{non_blank, DocumentParser};
use crate::error::IngestResult;
use docbot_core::DocumentFormat;
use scraper::{ElementRef, Html, Node};

/// Elements whose contents are not visible text.
const SKIPPED: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that separate words even without surrounding whitespace.
const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav",
    "ol", "p", "pre", "section", "table", "td", "th", "title", "tr", "ul",
];

/// Parser for HTML pages; yields the page's visible text on one line.
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser.
    pub fn new() -> Self {
        Self
    }

    fn collect_text(element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => {
                    let name = el.name();
                    if SKIPPED.contains(&name) {
                        continue;
                    }
                    let is_block = BLOCKS.contains(&name);
                    if is_block {
                        out.push(' ');
                    }
                    if let Some(child_el) = ElementRef::wrap(child) {
                        Self::collect_text(child_el, out);
                    }
                    if is_block {
                        out.push(' ');
                    }
                }
                _ => {}
            }
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for HtmlParser {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    fn parse(&self, bytes: &[u8]) -> IngestResult<String> {
        let markup = String::from_utf8_lossy(bytes);
        let document = Html::parse_document(&markup);

        let mut raw = String::new();
        Self::collect_text(document.root_element(), &mut raw);

        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        non_blank(self.format(), text)
    }
}
