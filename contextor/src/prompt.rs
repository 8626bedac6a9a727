//! Prompt builder: grounding context first, then the user's query.

/// Build the prompt sent to the language model.
///
/// # Example
/// ```
/// # use contextor::prompt::build_prompt;
/// let p = build_prompt("Is the printer ok?", "INC12345 - 'Printer on fire'");
/// assert!(p.starts_with("Using this context: INC12345"));
/// ```
pub fn build_prompt(query: &str, context: &str) -> String {
    format!(
        "Using this context: {}\nAnswer this query: {}",
        context.trim(),
        query.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_precedes_query() {
        let p = build_prompt("  refund policy?  ", " Doc ID: 789 ");
        assert_eq!(p, "Using this context: Doc ID: 789\nAnswer this query: refund policy?");
    }
}
