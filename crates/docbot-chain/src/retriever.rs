//! Question-to-segments retrieval.

use crate::error::ChainResult;
use crate::model::Embedder;
use crate::store::{EmbeddingStore, ScoredSegment};
use std::sync::Arc;
use tracing::debug;

/// Embeds a question and looks up the closest segments.
#[derive(Clone)]
pub struct Retriever {
    embedder: Arc<dyn Embedder>,
    max_results: usize,
    min_score: f32,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn Embedder>, max_results: usize, min_score: f32) -> Self {
        Self {
            embedder,
            max_results,
            min_score,
        }
    }

    pub async fn retrieve(
        &self,
        store: &EmbeddingStore,
        question: &str,
    ) -> ChainResult<Vec<ScoredSegment>> {
        if store.is_empty() {
            debug!("Embedding store is empty, nothing to retrieve");
            return Ok(vec![]);
        }

        let query = self.embedder.embed(question).await?;
        let results = store.search(&query, self.max_results, self.min_score);

        debug!(
            "Retrieved {} segments (best score {:.3})",
            results.len(),
            results.first().map(|r| r.score).unwrap_or(0.0)
        );

        Ok(results)
    }
}
