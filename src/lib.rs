#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod errors;
pub mod llm;
pub mod prompt;
pub mod rag;
pub mod search;
pub mod shell;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::RagResult;
use crate::llm::providers::openai_compatible::OpenAiCompatibleProvider;
use crate::prompt::PromptBuilder;
use crate::rag::RagPipeline;
use crate::search::client::ElasticClient;
use crate::search::provisioner::ensure_index;

/// Install the global `tracing` subscriber. Logs go to stderr so they do not
/// interleave with the console shell's output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the clients, make sure the index exists and wire up the pipeline.
pub async fn bootstrap(config: &AppConfig) -> RagResult<RagPipeline> {
    let search = Arc::new(ElasticClient::new(config.search.clone()));
    ensure_index(&search).await?;

    let llm = Arc::new(OpenAiCompatibleProvider::from_config(&config.llm));
    tracing::info!(
        search_url = %config.search.url,
        index = %config.search.index,
        api_base = %config.llm.api_base,
        model = %config.llm.model,
        "pipeline ready"
    );
    Ok(RagPipeline::new(
        search,
        llm,
        PromptBuilder::from_config(&config.prompt),
    ))
}

/// Load `.env` and `config.toml`, then [`bootstrap`].
pub async fn start() -> RagResult<RagPipeline> {
    // Load .env file if present (ignore error if not found)
    let _ = dotenvy::dotenv();
    let config = config::load_config()?;
    bootstrap(&config).await
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    let pipeline = match tauri::async_runtime::block_on(start()) {
        Ok(pipeline) => Arc::new(pipeline),
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            return;
        }
    };

    tauri::Builder::default()
        .manage(pipeline)
        .invoke_handler(tauri::generate_handler![
            commands::app_version,
            commands::ask,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Counsel RAG application");
}
