use crate::config::PromptConfig;
use crate::prompt::templates::{
    turn, CONTEXT_HEADING, DB_PATIENT_LABEL, DB_RESPONSE_LABEL, MISSING_FIELD, PATIENT_LABEL,
    SYSTEM_PROMPT,
};
use crate::search::types::SearchHit;

/// Turns a query and its retrieved hits into a single chat-template prompt.
///
/// Retrieved text is trusted: it is interpolated as-is, optionally capped at
/// `max_field_chars` characters per field. Output depends only on the inputs.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    max_field_chars: Option<usize>,
}

impl PromptBuilder {
    pub fn new(max_field_chars: Option<usize>) -> Self {
        Self { max_field_chars }
    }

    pub fn from_config(config: &PromptConfig) -> Self {
        Self::new(config.max_field_chars)
    }

    pub fn build(&self, query: &str, hits: &[SearchHit]) -> String {
        let context = self.context_block(hits);
        let user = format!("{PATIENT_LABEL} {query}\n\n{CONTEXT_HEADING}\n{context}");

        format!(
            "{}\n{}",
            turn("system", SYSTEM_PROMPT),
            turn("user", user.trim())
        )
    }

    fn context_block(&self, hits: &[SearchHit]) -> String {
        hits.iter()
            .map(|hit| {
                format!(
                    "{DB_PATIENT_LABEL} {}\n{DB_RESPONSE_LABEL} {}",
                    self.field(hit.source.context.as_deref()),
                    self.field(hit.source.response.as_deref()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn field<'a>(&self, value: Option<&'a str>) -> &'a str {
        let text = value.unwrap_or(MISSING_FIELD);
        match self.max_field_chars {
            Some(max) => truncate_chars(text, max),
            None => text,
        }
    }
}

/// Prompt with no per-field cap.
pub fn build_prompt(query: &str, hits: &[SearchHit]) -> String {
    PromptBuilder::default().build(query, hits)
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
