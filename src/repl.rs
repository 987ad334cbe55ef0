// src/repl.rs
use std::borrow::Cow;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::commands::{Outcome, dispatch};
use crate::services::chatbot::GREETING;
use crate::state::AppState;

const PROMPT: &str = "> ";

/// Read lines until `/quit` or end of input, writing each reply.
pub async fn run<R, W>(state: &mut AppState, mut input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let greeting = format!(
        "{}: {GREETING}\nType /help for commands.\n\n",
        state.config.bot_name
    );
    output.write_all(greeting.as_bytes()).await?;

    let mut buf = Vec::new();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = decode_line(&buf);

        match dispatch(state, &line) {
            Outcome::Reply(reply) => {
                output.write_all(reply.as_bytes()).await?;
                output.write_all(b"\n\n").await?;
            }
            Outcome::Nothing => {}
            Outcome::Quit => break,
        }
    }

    info!(exchanges = state.transcript.len(), "session finished");
    output.write_all(b"\n").await?;
    output.flush().await
}

/// Bytes that are not UTF-8 become U+FFFD; the rest of the line is kept.
fn decode_line(buf: &[u8]) -> String {
    let raw = buf.strip_suffix(b"\n").unwrap_or(buf);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        warn!("input line was not valid UTF-8; invalid bytes replaced");
    }
    line.into_owned()
}
