//! Terminal front end: one input line per question.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::errors::RagResult;
use crate::rag::RagPipeline;

pub const TITLE: &str = "RAG Function Invocation";
pub const INPUT_LABEL: &str = "Enter your input: ";
pub const BUSY: &str = "Processing...";
pub const DONE: &str = "Completed!";

/// Read queries until EOF, answering each one before reading the next.
///
/// A failed request prints the error and no answer; the loop keeps going.
pub async fn run_shell<R, W>(
    pipeline: &RagPipeline,
    mut input: R,
    mut output: W,
) -> RagResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut raw = Vec::new();
    output.write_all(format!("{TITLE}\n\n").as_bytes()).await?;

    loop {
        output.write_all(INPUT_LABEL.as_bytes()).await?;
        output.flush().await?;

        raw.clear();
        if input.read_until(b'\n', &mut raw).await? == 0 {
            output.write_all(b"\n").await?;
            output.flush().await?;
            tracing::info!("input closed; shell exiting");
            return Ok(());
        }
        let query = decode_line(&raw);

        output.write_all(format!("{BUSY}\n").as_bytes()).await?;
        output.flush().await?;

        match pipeline.run(&query).await {
            Ok(answer) => {
                output
                    .write_all(format!("{DONE}\n{}\n\n", answer.text).as_bytes())
                    .await?;
            }
            Err(e) => {
                tracing::error!(error = %e, "query failed");
                output.write_all(format!("Error: {e}\n\n").as_bytes()).await?;
            }
        }
    }
}

/// Strip the line terminator; invalid UTF-8 is replaced rather than rejected.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
