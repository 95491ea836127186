use async_trait::async_trait;

use crate::errors::RagResult;
use crate::search::types::SearchHit;

/// Source of ranked context for a query.
/// The orchestrator only depends on this trait, so tests can substitute fixed hit lists.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Returns the best matches for `query`, most relevant first. No hits is not an error.
    async fn search(&self, query: &str) -> RagResult<Vec<SearchHit>>;
}
