use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::RagResult;

const CONFIG_FILE: &str = "config.toml";
const APP_DIR: &str = "counsel-rag";

pub const ENV_SEARCH_URL: &str = "COUNSEL_RAG_SEARCH_URL";
pub const ENV_LLM_API_BASE: &str = "COUNSEL_RAG_LLM_API_BASE";
pub const ENV_LLM_API_KEY: &str = "COUNSEL_RAG_LLM_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Search engine endpoint, index layout and query ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_url")]
    pub url: String,
    #[serde(default = "default_index")]
    pub index: String,
    /// Maximum number of hits fed into the prompt.
    #[serde(default = "default_result_size")]
    pub result_size: usize,
    #[serde(default = "default_context_boost")]
    pub context_boost: f64,
    #[serde(default = "default_response_boost")]
    pub response_boost: f64,
    /// Only used when the index has to be created.
    #[serde(default = "default_shards")]
    pub shards: u32,
    #[serde(default)]
    pub replicas: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: default_search_url(),
            index: default_index(),
            result_size: default_result_size(),
            context_boost: default_context_boost(),
            response_boost: default_response_boost(),
            shards: default_shards(),
            replicas: 0,
        }
    }
}

fn default_search_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_index() -> String {
    "conversations".to_string()
}

fn default_result_size() -> usize {
    5
}

fn default_context_boost() -> f64 {
    2.0
}

fn default_response_boost() -> f64 {
    1.0
}

fn default_shards() -> u32 {
    1
}

/// OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Sent only when set; otherwise the server default applies.
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: default_api_key(),
            model: default_model(),
            temperature: None,
        }
    }
}

fn default_api_base() -> String {
    "http://localhost:11434/v1".to_string()
}

fn default_api_key() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Per-field character cap for retrieved text. `None` interpolates hits verbatim.
    #[serde(default)]
    pub max_field_chars: Option<usize>,
}

impl AppConfig {
    /// Overwrite endpoint settings from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SEARCH_URL) {
            tracing::debug!(url = %url, "search url overridden from environment");
            self.search.url = url;
        }
        if let Some(base) = lookup(ENV_LLM_API_BASE) {
            tracing::debug!(api_base = %base, "llm api base overridden from environment");
            self.llm.api_base = base;
        }
        if let Some(key) = lookup(ENV_LLM_API_KEY) {
            self.llm.api_key = key;
        }
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            let candidate = parent.join(CONFIG_FILE);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "config found next to executable");
                return Some(candidate);
            }
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join(CONFIG_FILE);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "config found in working directory");
            return Some(candidate);
        }
    }

    let candidate = dirs::config_dir()?.join(APP_DIR).join(CONFIG_FILE);
    if candidate.exists() {
        tracing::debug!(path = %candidate.display(), "config found in user config dir");
        return Some(candidate);
    }

    None
}

pub fn load_config_from(path: &Path) -> RagResult<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::info!(
        path = %path.display(),
        index = %config.search.index,
        model = %config.llm.model,
        "config loaded"
    );
    Ok(config)
}

/// Load `config.toml` (or defaults when none is found), then apply environment overrides.
pub fn load_config() -> RagResult<AppConfig> {
    let mut config = match resolve_config_path() {
        Some(path) => load_config_from(&path)?,
        None => {
            tracing::info!("no config.toml found; using built-in defaults");
            AppConfig::default()
        }
    };
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}
