//! Public API types re-used by external crates (e.g., the HTTP API layer).

use std::fmt;

use serde::Serialize;

/// Which upstream collaborator supplied the context used for an answer.
///
/// Serializes to the exact labels clients see in `context_source`.
///
/// # Example
/// ```
/// use contextor::ContextSource;
/// assert_eq!(ContextSource::VectorDb.label(), "Vector DB");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ContextSource {
    #[serde(rename = "ServiceNow")]
    ServiceNow,
    #[serde(rename = "Vector DB")]
    VectorDb,
}

impl ContextSource {
    pub fn label(self) -> &'static str {
        match self {
            ContextSource::ServiceNow => "ServiceNow",
            ContextSource::VectorDb => "Vector DB",
        }
    }
}

impl fmt::Display for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Context chosen to ground the answer, together with its origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedContext {
    pub text: String,
    pub source: ContextSource,
}

/// Final answer together with the label of the context it was grounded on.
///
/// # Example
/// ```
/// use contextor::{ChatAnswer, ContextSource};
/// let a = ChatAnswer {
///     response: "Mock AI Response: ...".into(),
///     context_source: ContextSource::ServiceNow,
/// };
/// assert_eq!(a.context_source.to_string(), "ServiceNow");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatAnswer {
    pub response: String,
    pub context_source: ContextSource,
}

/// Identity of a collaborator, attached to failures for log attribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collaborator {
    /// Ticketing system lookup (ServiceNow).
    TicketSystem,
    /// Knowledge-base lookup (vector store).
    KnowledgeBase,
    /// Language-model generation.
    LanguageModel,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Collaborator::TicketSystem => "ticket_system",
            Collaborator::KnowledgeBase => "knowledge_base",
            Collaborator::LanguageModel => "language_model",
        };
        f.write_str(name)
    }
}
