//! Context selection: ticket context takes precedence over the knowledge base.

use crate::api_types::{ContextSource, SelectedContext};

/// Picks the context used to ground the answer.
///
/// A present, non-empty ticket context wins; otherwise the knowledge-base
/// context is used. Both inputs are always computed by the caller.
///
/// # Example
/// ```
/// use contextor::{ContextSource, select_context};
/// let picked = select_context(None, "Doc ID: 789".into());
/// assert_eq!(picked.source, ContextSource::VectorDb);
/// ```
pub fn select_context(ticket: Option<String>, knowledge: String) -> SelectedContext {
    match ticket {
        Some(text) if !text.is_empty() => SelectedContext {
            text,
            source: ContextSource::ServiceNow,
        },
        _ => SelectedContext {
            text: knowledge,
            source: ContextSource::VectorDb,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_context_wins_when_present() {
        let picked = select_context(Some("INC12345".into()), "Doc ID: 789".into());
        assert_eq!(picked.source, ContextSource::ServiceNow);
        assert_eq!(picked.text, "INC12345");
    }

    #[test]
    fn knowledge_context_used_when_ticket_absent() {
        let picked = select_context(None, "Doc ID: 789".into());
        assert_eq!(picked.source, ContextSource::VectorDb);
        assert_eq!(picked.text, "Doc ID: 789");
    }

    #[test]
    fn empty_ticket_context_counts_as_absent() {
        let picked = select_context(Some(String::new()), "Doc ID: 789".into());
        assert_eq!(picked.source, ContextSource::VectorDb);
    }
}
