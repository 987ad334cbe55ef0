// src/services/chatbot.rs
use crate::message::ChatExchange;

pub const FALLBACK_RESPONSE: &str =
    "I'm not sure about that. Try asking about travel, electricity, food, or recycling.";

pub const GREETING: &str = "Hi! Ask me about travel, electricity, or eco-friendly tips.";

/// Ordered keyword/response pairs. The first keyword found in a message wins,
/// so entry order is part of the behavior.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable<'a> {
    entries: &'a [(&'a str, &'a str)],
}

pub static ECO_RESPONSES: KeywordTable<'static> = KeywordTable::new(&[
    (
        "hello",
        "Hello! I can help you reduce your carbon footprint. Ask about travel, electricity, or food.",
    ),
    (
        "hi",
        "Hi there! Try asking: 'how to reduce electricity use' or 'tips for travel'.",
    ),
    (
        "travel",
        "Consider walking, cycling, or using public transport to reduce emissions.",
    ),
    (
        "car",
        "Maintain tyre pressure and drive efficiently to reduce fuel usage.",
    ),
    (
        "electricity",
        "Switch to LED bulbs and turn off appliances when not in use.",
    ),
    (
        "food",
        "Eat more local and seasonal foods. Reducing meat helps too!",
    ),
    (
        "flight",
        "Try combining trips or opting for trains over short flights.",
    ),
    (
        "recycle",
        "Separate waste, compost, and recycle materials whenever possible.",
    ),
    ("bye", "Goodbye! Remember, small steps make a big difference"),
]);

impl<'a> KeywordTable<'a> {
    /// Keywords are expected in lower case; messages are lower-cased before
    /// the scan.
    pub const fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(keyword, _)| *keyword)
    }

    /// First entry whose keyword occurs anywhere in `msg`, in table order.
    pub fn find(&self, msg: &str) -> Option<(&'a str, &'a str)> {
        let msg_lower = msg.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| msg_lower.contains(keyword))
            .copied()
    }
}

impl Default for KeywordTable<'static> {
    fn default() -> Self {
        ECO_RESPONSES
    }
}

/// Substring match against the table, falling back to a fixed reply.
/// "carbon" matches "car": there is no word splitting.
pub fn match_response<'a>(user_msg: &str, table: &KeywordTable<'a>) -> &'a str {
    table
        .find(user_msg)
        .map(|(_, response)| response)
        .unwrap_or(FALLBACK_RESPONSE)
}

/// One chat turn. Blank input produces no exchange at all.
pub fn generate_reply(user_msg: &str, table: &KeywordTable<'_>) -> Option<ChatExchange> {
    let trimmed = user_msg.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (keyword, response) = match table.find(trimmed) {
        Some((keyword, response)) => (Some(keyword.to_string()), response),
        None => (None, FALLBACK_RESPONSE),
    };

    Some(ChatExchange {
        user_text: trimmed.to_string(),
        matched_response: response.to_string(),
        keyword,
    })
}
