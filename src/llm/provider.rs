use async_trait::async_trait;

use crate::errors::RagResult;

/// Chat-completion backend. The pipeline holds one behind an `Arc`,
/// so tests can swap in a canned provider.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Sends `prompt` as a single user message and returns the generated text.
    async fn complete(&self, prompt: &str) -> RagResult<String>;
}
