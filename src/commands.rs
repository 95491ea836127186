use std::sync::Arc;

use tauri::State;

use crate::errors::RagError;
use crate::rag::{Answer, RagPipeline};

/// Crate version, shown in the window title.
#[tauri::command]
pub fn app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Answer one query from the input box. The frontend shows its spinner until this resolves.
#[tauri::command]
pub async fn ask(
    query: String,
    pipeline: State<'_, Arc<RagPipeline>>,
) -> Result<Answer, RagError> {
    tracing::info!(query_len = query.len(), "ask invoked");
    pipeline.run(&query).await
}
