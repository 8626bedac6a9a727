//! Typed errors for the contextor crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

use crate::api_types::Collaborator;

/// Failure reported by a single collaborator call.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The upstream could not be reached or refused the call.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// The upstream answered with something we could not use.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// Errors from the language-model client.
    #[error(transparent)]
    Llm(#[from] AiLlmError),
}

/// Failure of a whole chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// One of the collaborators failed; the pipeline stopped there.
    #[error("{collaborator} failed: {source}")]
    Collaborator {
        collaborator: Collaborator,
        #[source]
        source: CollaboratorError,
    },
}

impl ChatError {
    /// Which collaborator caused the failure.
    pub fn collaborator(&self) -> Collaborator {
        match self {
            ChatError::Collaborator { collaborator, .. } => *collaborator,
        }
    }

    pub(crate) fn at(collaborator: Collaborator) -> impl FnOnce(CollaboratorError) -> Self {
        move |source| ChatError::Collaborator {
            collaborator,
            source,
        }
    }
}
