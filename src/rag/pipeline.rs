use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use crate::errors::RagResult;
use crate::llm::provider::CompletionProvider;
use crate::prompt::PromptBuilder;
use crate::search::retriever::Retriever;

/// Result of one retrieval + completion round.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub request_id: uuid::Uuid,
    pub text: String,
    /// Number of retrieved records the prompt was built from.
    pub hits: usize,
    pub answered_at: chrono::DateTime<chrono::Utc>,
}

/// Search → prompt → completion for a single query.
///
/// Holds no per-request state; the same pipeline serves every UI interaction.
pub struct RagPipeline {
    retriever: Arc<dyn Retriever>,
    llm: Arc<dyn CompletionProvider>,
    prompts: PromptBuilder,
}

impl RagPipeline {
    pub fn new(
        retriever: Arc<dyn Retriever>,
        llm: Arc<dyn CompletionProvider>,
        prompts: PromptBuilder,
    ) -> Self {
        Self {
            retriever,
            llm,
            prompts,
        }
    }

    /// Generated text for `query`.
    pub async fn answer(&self, query: &str) -> RagResult<String> {
        self.run(query).await.map(|answer| answer.text)
    }

    pub async fn run(&self, query: &str) -> RagResult<Answer> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("rag_request", %request_id);

        async move {
            tracing::info!(query = %query, "answering query");

            let hits = self.retriever.search(query).await?;
            let prompt = self.prompts.build(query, &hits);
            tracing::debug!(hits = hits.len(), prompt = %prompt, "prompt built");

            let text = self.llm.complete(&prompt).await?;
            tracing::info!(
                provider = %self.llm.name(),
                hits = hits.len(),
                answer_len = text.len(),
                "query answered"
            );

            Ok(Answer {
                request_id,
                text,
                hits: hits.len(),
                answered_at: chrono::Utc::now(),
            })
        }
        .instrument(span)
        .await
    }
}
