use thiserror::Error;

#[derive(Debug, Error)]
pub enum RagError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search engine error: {0}")]
    Search(String),

    #[error("LLM provider error: {0}")]
    LlmProvider(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl serde::Serialize for RagError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

pub type RagResult<T> = Result<T, RagError>;
