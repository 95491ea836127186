// Prevents additional console window on Windows in release
#![cfg_attr(
    all(feature = "desktop", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(feature = "desktop")]
fn main() {
    counsel_rag_lib::run()
}

#[cfg(not(feature = "desktop"))]
#[tokio::main]
async fn main() -> counsel_rag_lib::errors::RagResult<()> {
    counsel_rag_lib::init_tracing();

    let pipeline = counsel_rag_lib::start().await?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    counsel_rag_lib::shell::run_shell(&pipeline, stdin, tokio::io::stdout()).await
}
