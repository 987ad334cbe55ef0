use tracing::debug;

use crate::services::chatbot::generate_reply;
use crate::services::session_manager::MessageRole;
use crate::state::AppState;

/// Match a chat line and record it. `None` for blank input.
pub fn chat_handler(state: &mut AppState, line: &str) -> Option<String> {
    let exchange = generate_reply(line, &state.responses)?;

    debug!(keyword = ?exchange.keyword, "chat message matched");
    state.metrics.increment_keyword(exchange.keyword.as_deref());

    let reply = format!("{}: {}", state.config.bot_name, exchange.matched_response);
    state.transcript.append(exchange);
    Some(reply)
}

pub fn history_handler(state: &AppState) -> String {
    if state.transcript.is_empty() {
        return "No messages yet.".to_string();
    }
    state
        .transcript
        .lines()
        .into_iter()
        .map(|(role, text)| match role {
            MessageRole::User => format!("You: {text}"),
            MessageRole::Bot => format!("{}: {text}", state.config.bot_name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn clear_handler(state: &mut AppState) -> String {
    let removed = state.transcript.clear();
    debug!(removed, "transcript cleared");
    format!("Cleared {removed} message(s).")
}
