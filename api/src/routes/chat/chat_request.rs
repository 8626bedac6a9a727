use serde::Deserialize;

/// Request payload for /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Natural language question.
    pub query: String,
}
