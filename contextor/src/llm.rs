//! [`ResponseGenerator`] backed by a real language model.

use std::sync::Arc;

use ai_llm_service::OllamaService;
use async_trait::async_trait;
use tracing::debug;

use crate::{error::CollaboratorError, prompt::build_prompt, traits::ResponseGenerator};

/// Sends the grounded prompt to Ollama and returns its answer verbatim.
///
/// # Example
/// ```no_run
/// # use std::sync::Arc;
/// # use ai_llm_service::{LlmModelConfig, OllamaService};
/// # use contextor::llm::LlmResponseGenerator;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cfg = LlmModelConfig::from_env()?;
/// let generator = LlmResponseGenerator::new(Arc::new(OllamaService::new(cfg)?));
/// # let _ = generator;
/// # Ok(()) }
/// ```
pub struct LlmResponseGenerator {
    svc: Arc<OllamaService>,
}

impl LlmResponseGenerator {
    pub fn new(svc: Arc<OllamaService>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl ResponseGenerator for LlmResponseGenerator {
    async fn generate(&self, query: &str, context: &str) -> Result<String, CollaboratorError> {
        let prompt = build_prompt(query, context);
        debug!(model = self.svc.model(), prompt_chars = prompt.len(), "calling LLM");
        Ok(self.svc.generate(&prompt).await?)
    }
}
