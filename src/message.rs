// src/message.rs
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatExchange {
    pub user_text: String,
    pub matched_response: String,
    /// Keyword that produced the response, `None` for the fallback.
    pub keyword: Option<String>,
}
