//! Content chunking for retrieval.
//!
//! Splits document text into segments small enough to embed, preferring
//! paragraph and sentence boundaries.

use docbot_core::{Document, TextSegment};

/// Configuration for chunking.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Target size of each chunk in characters.
    pub chunk_size: usize,
    /// Number of characters to overlap between chunks.
    pub chunk_overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
        }
    }
}

impl From<&docbot_config::ChunkingConfig> for ChunkConfig {
    fn from(config: &docbot_config::ChunkingConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}

/// Content chunker for splitting text.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkConfig,
}

impl Chunker {
    /// Create a new chunker with the given configuration.
    pub fn new(config: ChunkConfig) -> Self {
        Self { config }
    }

    /// Create a chunker with default configuration.
    pub fn default_chunker() -> Self {
        Self::new(ChunkConfig::default())
    }

    /// Split a document into segments.
    pub fn chunk_document(&self, document: &Document) -> Vec<TextSegment> {
        self.chunk_text(&document.text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| TextSegment::new(document, index, text))
            .collect()
    }

    /// Split text into chunks of at most `chunk_size` characters.
    /// Works by splitting on paragraph/sentence boundaries where possible.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![];
        }

        // If it fits in one chunk, return it
        if trimmed.chars().count() <= self.config.chunk_size {
            return vec![trimmed.to_string()];
        }

        let mut chunks: Vec<String> = Vec::new();
        let mut current_chunk = String::new();

        for para in trimmed.split("\n\n") {
            let para = para.trim();
            if para.is_empty() {
                continue;
            }

            if para.chars().count() <= self.config.chunk_size {
                self.append(&mut chunks, &mut current_chunk, para, "\n\n", true);
                continue;
            }

            // Paragraph itself is too long: split into sentences, or by
            // characters when it has none (e.g. JSON rendered on one line)
            let sentences = self.split_sentences(para);
            let (pieces, overlap) = if sentences.len() <= 1 {
                (self.force_split_by_chars(para), false)
            } else {
                let pieces = sentences
                    .into_iter()
                    .flat_map(|sentence| {
                        if sentence.chars().count() > self.config.chunk_size {
                            self.force_split_by_chars(sentence)
                        } else {
                            vec![sentence.to_string()]
                        }
                    })
                    .collect();
                (pieces, true)
            };

            let mut separator = "\n\n";
            for piece in pieces {
                self.append(&mut chunks, &mut current_chunk, &piece, separator, overlap);
                separator = " ";
            }
        }

        // Don't forget the last chunk
        self.push_chunk(&mut chunks, current_chunk.trim());

        chunks
    }

    /// Add a piece to the current chunk, flushing first if it would not fit.
    fn append(
        &self,
        chunks: &mut Vec<String>,
        current_chunk: &mut String,
        piece: &str,
        separator: &str,
        overlap: bool,
    ) {
        let piece_len = piece.chars().count();
        let current_len = current_chunk.chars().count();

        if current_len > 0 && current_len + separator.len() + piece_len > self.config.chunk_size {
            self.flush(chunks, current_chunk, overlap);
            self.fit_seed(current_chunk, separator.len() + piece_len);
        }

        if !current_chunk.is_empty() {
            current_chunk.push_str(separator);
        }
        current_chunk.push_str(piece);
    }

    /// Save the current chunk and start the next one, optionally seeded with
    /// the tail of the saved chunk.
    fn flush(&self, chunks: &mut Vec<String>, current_chunk: &mut String, overlap: bool) {
        self.push_chunk(chunks, current_chunk.trim());

        if overlap && self.config.chunk_overlap > 0 {
            let chars: Vec<char> = current_chunk.chars().collect();
            let skip = chars.len().saturating_sub(self.config.chunk_overlap);
            *current_chunk = chars[skip..].iter().collect();
        } else {
            current_chunk.clear();
        }
    }

    /// Shorten an overlap seed so that `incoming` more characters still fit.
    fn fit_seed(&self, current_chunk: &mut String, incoming: usize) {
        let budget = self.config.chunk_size.saturating_sub(incoming);
        let chars: Vec<char> = current_chunk.chars().collect();
        let skip = chars.len().saturating_sub(budget);

        let seed: String = chars[skip..].iter().collect();
        *current_chunk = seed.trim_start().to_string();
    }

    /// Record a finished chunk. Every non-empty chunk is kept, however short.
    fn push_chunk(&self, chunks: &mut Vec<String>, chunk_text: &str) {
        if !chunk_text.is_empty() {
            chunks.push(chunk_text.to_string());
        }
    }

    /// Force split text by character limit (for content without natural breaks).
    fn force_split_by_chars(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut result = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = std::cmp::min(start + self.config.chunk_size, chars.len());
            result.push(chars[start..end].iter().collect());
            if end == chars.len() {
                break;
            }
            // Move forward with overlap
            start = end.saturating_sub(self.config.chunk_overlap).max(start + 1);
        }

        result
    }

    /// Split text into sentences.
    fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for (i, c) in text.char_indices() {
            if i < start {
                continue;
            }
            if c == '.' || c == '!' || c == '?' {
                // Check if next char is space or end
                let next_idx = i + c.len_utf8();
                if next_idx >= text.len()
                    || text[next_idx..].starts_with(' ')
                    || text[next_idx..].starts_with('\n')
                {
                    sentences.push(&text[start..next_idx]);
                    start = next_idx;
                    if start < text.len() && text[start..].starts_with(' ') {
                        start += 1;
                    }
                }
            }
        }

        if start < text.len() {
            let remaining = text[start..].trim();
            if !remaining.is_empty() {
                sentences.push(remaining);
            }
        }

        if sentences.is_empty() && !text.trim().is_empty() {
            sentences.push(text.trim());
        }

        sentences
    }
}
