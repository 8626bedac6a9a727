use contextor::{ChatAnswer, ContextSource};
use serde::Serialize;

/// Response payload for /chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Generated answer (plain text).
    pub response: String,
    /// Which collaborator supplied the grounding context.
    pub context_source: ContextSource,
}

impl From<ChatAnswer> for ChatResponse {
    fn from(a: ChatAnswer) -> Self {
        Self {
            response: a.response,
            context_source: a.context_source,
        }
    }
}
