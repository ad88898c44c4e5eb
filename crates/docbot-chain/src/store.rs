//! In-memory embedding store with brute-force cosine search.

use crate::error::{ChainError, ChainResult};
use docbot_core::TextSegment;

/// A segment returned by a search, with its similarity to the query.
#[derive(Debug, Clone)]
pub struct ScoredSegment {
    pub segment: TextSegment,
    /// Cosine similarity (-1.0 to 1.0).
    pub score: f32,
}

/// Calculate cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot_product = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b) {
        dot_product += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denominator = norm_a.sqrt() * norm_b.sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    dot_product / denominator
}

/// Segments and their vectors, held in insertion order.
#[derive(Debug, Default)]
pub struct EmbeddingStore {
    entries: Vec<(TextSegment, Vec<f32>)>,
    dimensions: Option<usize>,
}

impl EmbeddingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment. Every vector must have the same dimensions.
    pub fn add(&mut self, segment: TextSegment, vector: Vec<f32>) -> ChainResult<()> {
        match self.dimensions {
            Some(expected) if expected != vector.len() => {
                return Err(ChainError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
            None => self.dimensions = Some(vector.len()),
            _ => {}
        }

        self.entries.push((segment, vector));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the segments most similar to `query`.
    ///
    /// This performs a brute-force scan, which is plenty for a fixed set of
    /// documents loaded at startup.
    pub fn search(&self, query: &[f32], max_results: usize, min_score: f32) -> Vec<ScoredSegment> {
        let mut results: Vec<ScoredSegment> = self
            .entries
            .iter()
            .map(|(segment, vector)| (segment, cosine_similarity(query, vector)))
            .filter(|(_, score)| *score >= min_score)
            .map(|(segment, score)| ScoredSegment {
                segment: segment.clone(),
                score,
            })
            .collect();

        // Stable sort keeps insertion order for equal scores
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(max_results);

        results
    }
}
