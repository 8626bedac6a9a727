//! Chat request handling with context selection.
//!
//! [`ChatPipeline::handle`] asks the ticketing system and the knowledge base
//! for context, keeps the ticket context when one exists, and lets the
//! response generator write the answer. Collaborators are injected as trait
//! objects; [`mock`] provides canned implementations and [`llm`] a real
//! Ollama-backed generator.

mod api_types;
mod error;
mod pipeline;
mod select;
mod traits;

pub mod llm;
pub mod mock;
pub mod prompt;

pub use api_types::{ChatAnswer, Collaborator, ContextSource, SelectedContext};
pub use error::{ChatError, CollaboratorError};
pub use pipeline::ChatPipeline;
pub use select::select_context;
pub use traits::{KnowledgeContextFetcher, ResponseGenerator, TicketContextFetcher};
