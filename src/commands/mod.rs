// src/commands/mod.rs
pub mod calc;
pub mod chat;

use tracing::debug;

use crate::state::AppState;
use calc::{CALC_USAGE, calc_handler};
use chat::{chat_handler, clear_handler, history_handler};

pub const ABOUT: &str = "Eco Footprint Assistant

Estimates your annual carbon footprint from:
- Daily car travel distance
- Monthly electricity usage
- Yearly flight count
- Type of diet followed

The calculator breaks your CO₂ emissions down by category and suggests
where to cut first. EcoBot answers simple questions with eco-friendly advice.";

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
    Nothing,
}

pub fn help_text() -> String {
    format!(
        "Commands:
  {CALC_USAGE}
  /history   show this conversation
  /clear     forget this conversation
  /stats     show usage counters
  /about     about this tool
  /help      this list
  /quit      leave
Anything else is sent to the chat assistant."
    )
}

/// Route one console line. Lines starting with `/` are commands, the rest
/// is chat.
pub fn dispatch(state: &mut AppState, line: &str) -> Outcome {
    let line = line.trim();
    if line.is_empty() {
        return Outcome::Nothing;
    }

    let Some(command) = line.strip_prefix('/') else {
        return match chat_handler(state, line) {
            Some(reply) => Outcome::Reply(reply),
            None => Outcome::Nothing,
        };
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = parts.collect();
    debug!(command = %name, args = args.len(), "dispatching command");

    match name.as_str() {
        "calc" => Outcome::Reply(calc_handler(state, &args)),
        "history" => Outcome::Reply(history_handler(state)),
        "clear" => Outcome::Reply(clear_handler(state)),
        "stats" => Outcome::Reply(stats_handler(state)),
        "about" => Outcome::Reply(ABOUT.to_string()),
        "help" => Outcome::Reply(help_text()),
        "quit" | "exit" => Outcome::Quit,
        _ => Outcome::Reply(format!("Unknown command '/{name}'. Type /help for a list.")),
    }
}

fn stats_handler(state: &AppState) -> String {
    serde_json::to_string_pretty(state.metrics.get_metrics())
        .unwrap_or_else(|e| format!("Could not render stats: {e}"))
}
