use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::errors::{RagError, RagResult};
use crate::llm::provider::CompletionProvider;
use crate::llm::types::{CallConfig, ChatMessage};

pub struct OpenAiCompatibleProvider {
    id: String,
    api_base: String,
    api_key: String,
    call: CallConfig,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    pub fn new(id: String, api_base: String, api_key: String, call: CallConfig) -> Self {
        Self {
            id,
            api_base,
            api_key,
            call,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            "openai_compatible".to_string(),
            config.api_base.clone(),
            config.api_key.clone(),
            CallConfig {
                model: config.model.clone(),
                temperature: config.temperature,
            },
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.id
    }

    async fn complete(&self, prompt: &str) -> RagResult<String> {
        let mut body = serde_json::json!({
            "model": self.call.model,
            "messages": [ChatMessage::user(prompt)],
            "stream": false,
        });
        if let Some(temperature) = self.call.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        tracing::debug!(
            provider = %self.id,
            model = %self.call.model,
            prompt_len = prompt.len(),
            "sending LLM request"
        );

        let mut request = self.client.post(self.endpoint()).json(&body);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let err_body = response.text().await.unwrap_or_default();
            return Err(RagError::LlmProvider(format!("{}: {}", status, err_body)));
        }

        let json: serde_json::Value = response.json().await?;
        let first = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| RagError::LlmProvider("response contained no choices".to_string()))?;

        // Null content is an empty reply; a missing or non-string one is malformed.
        let content = match first.get("message").and_then(|m| m.get("content")) {
            Some(serde_json::Value::String(text)) => text.clone(),
            Some(serde_json::Value::Null) => String::new(),
            _ => {
                return Err(RagError::LlmProvider(
                    "choice contained no message content".to_string(),
                ))
            }
        };

        tracing::info!(
            provider = %self.id,
            content_len = content.len(),
            finish_reason = first["finish_reason"].as_str().unwrap_or(""),
            "LLM JSON response received"
        );
        Ok(content)
    }
}
