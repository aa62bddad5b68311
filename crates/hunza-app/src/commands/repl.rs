use std::future::Future;
use std::sync::Arc;

use hunza_translator::{BurushaskiTranslator, Translator};
use hunza_types::SourceLanguage;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::request::{ErrorResponse, validate_text};
use crate::state::AppState;

/// Translate each non-blank input line, writing one JSON result per line.
///
/// Stops at end of input or when `shutdown` resolves. Invalid lines produce an
/// `{"error": ...}` line and the loop continues; store failures end it.
/// Returns the number of lines translated.
pub async fn run<R, W>(
    state: Arc<AppState>,
    source: SourceLanguage,
    input: R,
    mut output: W,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tokio::pin!(shutdown);

    let translator = BurushaskiTranslator::with_config(&state.lexicon, &state.config.translator);
    let mut lines = input.lines();
    let mut translated = 0usize;

    loop {
        let line = tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let payload = match validate_text(&state.config.limits, &line) {
            Ok(()) => {
                let result = translator.translate(&line, source)?;
                translated += 1;
                serde_json::to_string(&result)?
            }
            Err(e) => {
                tracing::warn!("Rejected input line: {e}");
                serde_json::to_string(&ErrorResponse {
                    error: e.to_string(),
                })?
            }
        };

        output.write_all(payload.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(translated)
}
