// src/services/session_manager.rs
use crate::message::ChatExchange;

#[derive(Clone, Debug, PartialEq)]
pub enum MessageRole {
    User,
    Bot,
}

/// In-memory chat history of the running process. Nothing here outlives it.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    exchanges: Vec<ChatExchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    // Record an exchange and return the new history length.
    pub fn append(&mut self, exchange: ChatExchange) -> usize {
        self.exchanges.push(exchange);
        self.exchanges.len()
    }

    /// History flattened into speaker-tagged lines, oldest first.
    pub fn lines(&self) -> Vec<(MessageRole, &str)> {
        self.exchanges
            .iter()
            .flat_map(|e| {
                [
                    (MessageRole::User, e.user_text.as_str()),
                    (MessageRole::Bot, e.matched_response.as_str()),
                ]
            })
            .collect()
    }

    /// Drop everything. Returns number of exchanges removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.exchanges.len();
        self.exchanges.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
