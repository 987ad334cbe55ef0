use anyhow::Context;
use tokio::io::BufReader;

use eco_footprint_assistant::{config::AppConfig, repl, state::AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(output = ?config.output, "eco footprint assistant starting");

    let mut state = AppState::new(config);
    repl::run(
        &mut state,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
    .context("console I/O failed")?;

    Ok(())
}
