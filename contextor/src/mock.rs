//! Fixed-latency stand-ins for the ticketing system, the vector store and
//! the language model. They return canned text and never fail.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::info;

use crate::{
    error::CollaboratorError,
    prompt::build_prompt,
    traits::{KnowledgeContextFetcher, ResponseGenerator, TicketContextFetcher},
};

/// Keyword that makes [`MockServiceNow`] report a matching ticket.
pub const INCIDENT_KEYWORD: &str = "incident";

pub const MOCK_TICKET_CONTEXT: &str = "Found 1 matching incident: INC12345 - 'Printer on fire'";

pub const MOCK_VECTOR_CONTEXT: &str = "Vector DB context: 'Printers are flammable. (Doc ID: 789)'";

pub const MOCK_LLM_PREFIX: &str = "Mock AI Response: Yes, the printer is on fire. Context: ";

pub const DEFAULT_TICKET_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_VECTOR_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_LLM_DELAY: Duration = Duration::from_millis(1000);

/// Mocked ServiceNow lookup.
#[derive(Clone, Debug)]
pub struct MockServiceNow {
    delay: Duration,
}

impl MockServiceNow {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockServiceNow {
    fn default() -> Self {
        Self::with_delay(DEFAULT_TICKET_DELAY)
    }
}

#[async_trait]
impl TicketContextFetcher for MockServiceNow {
    async fn fetch(&self, query: &str) -> Result<Option<String>, CollaboratorError> {
        info!(%query, "Fetching context from ServiceNow");
        sleep(self.delay).await;

        if query.to_lowercase().contains(INCIDENT_KEYWORD) {
            Ok(Some(MOCK_TICKET_CONTEXT.to_string()))
        } else {
            Ok(None)
        }
    }
}

/// Mocked vector store lookup.
#[derive(Clone, Debug)]
pub struct MockVectorDb {
    delay: Duration,
}

impl MockVectorDb {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockVectorDb {
    fn default() -> Self {
        Self::with_delay(DEFAULT_VECTOR_DELAY)
    }
}

#[async_trait]
impl KnowledgeContextFetcher for MockVectorDb {
    async fn fetch(&self, query: &str) -> Result<String, CollaboratorError> {
        info!(%query, "Querying Vector DB");
        sleep(self.delay).await;
        Ok(MOCK_VECTOR_CONTEXT.to_string())
    }
}

/// Mocked language model.
#[derive(Clone, Debug)]
pub struct MockLlm {
    delay: Duration,
}

impl MockLlm {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockLlm {
    fn default() -> Self {
        Self::with_delay(DEFAULT_LLM_DELAY)
    }
}

#[async_trait]
impl ResponseGenerator for MockLlm {
    async fn generate(&self, query: &str, context: &str) -> Result<String, CollaboratorError> {
        let prompt = build_prompt(query, context);
        info!(prompt_chars = prompt.len(), "Calling LLM with combined prompt");
        sleep(self.delay).await;
        Ok(format!("{MOCK_LLM_PREFIX}{context}"))
    }
}
