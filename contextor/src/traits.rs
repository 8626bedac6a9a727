//! Collaborator seams of the chat pipeline.
//!
//! Each trait has a single async method so concrete transports (HTTP
//! clients, mocks, test fakes) can be injected at construction time.

use async_trait::async_trait;

use crate::error::CollaboratorError;

/// Looks up ticket context (e.g. ServiceNow incidents) for a query.
#[async_trait]
pub trait TicketContextFetcher: Send + Sync {
    /// Returns `Ok(None)` when no ticket matches the query.
    async fn fetch(&self, query: &str) -> Result<Option<String>, CollaboratorError>;
}

/// Looks up knowledge-base context (e.g. a vector store) for a query.
#[async_trait]
pub trait KnowledgeContextFetcher: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<String, CollaboratorError>;
}

/// Produces the final answer from the query and the selected context.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(&self, query: &str, context: &str) -> Result<String, CollaboratorError>;
}
