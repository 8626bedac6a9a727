use std::{sync::Arc, time::Duration};

use ai_llm_service::{
    AiLlmError, LlmModelConfig, LlmProvider, OllamaService, error_handler::env_opt,
};
use contextor::{
    ChatPipeline, ResponseGenerator,
    llm::LlmResponseGenerator,
    mock::{
        DEFAULT_LLM_DELAY, DEFAULT_TICKET_DELAY, DEFAULT_VECTOR_DELAY, MockLlm, MockServiceNow,
        MockVectorDb,
    },
};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_SERVICE_NAME: &str = "SuccessAI Backend";

/// Errors raised while loading configuration or wiring collaborators.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} (expected milliseconds as u64)")]
    InvalidDelay { var: &'static str, value: String },

    #[error(transparent)]
    Llm(#[from] AiLlmError),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. "127.0.0.1:8000".
    pub api_address: String,
    /// Name reported by the liveness endpoint.
    pub service_name: String,
    /// Simulated latency of the mocked ServiceNow lookup.
    pub ticket_delay: Duration,
    /// Simulated latency of the mocked vector store lookup.
    pub vector_delay: Duration,
    /// Simulated latency of the mocked LLM (ignored for real providers).
    pub llm_delay: Duration,
    /// Generation model selection.
    pub llm: LlmModelConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_opt)
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_address: lookup("API_ADDRESS").unwrap_or_else(|| DEFAULT_API_ADDRESS.into()),
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.into()),
            ticket_delay: delay(&lookup, "SERVICENOW_DELAY_MS", DEFAULT_TICKET_DELAY)?,
            vector_delay: delay(&lookup, "VECTOR_DB_DELAY_MS", DEFAULT_VECTOR_DELAY)?,
            llm_delay: delay(&lookup, "LLM_DELAY_MS", DEFAULT_LLM_DELAY)?,
            llm: LlmModelConfig::from_lookup(&lookup)?,
        })
    }
}

fn delay<F>(lookup: &F, var: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { var, value: raw }),
        None => Ok(default),
    }
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pipeline: Arc<ChatPipeline>,
}

impl AppState {
    pub fn new(config: AppConfig, pipeline: Arc<ChatPipeline>) -> Self {
        Self { config, pipeline }
    }

    /// Wire the collaborators described by `config` into a pipeline.
    ///
    /// Ticket and knowledge lookups are always mocked; the generator is
    /// mocked or Ollama-backed depending on `LLM_KIND`.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let generator: Arc<dyn ResponseGenerator> = match config.llm.provider {
            LlmProvider::Mock => Arc::new(MockLlm::with_delay(config.llm_delay)),
            LlmProvider::Ollama => {
                let svc = OllamaService::new(config.llm.clone())?;
                Arc::new(LlmResponseGenerator::new(Arc::new(svc)))
            }
        };
        info!(
            provider = %config.llm.provider,
            model = %config.llm.model,
            "response generator ready"
        );

        let pipeline = ChatPipeline::new(
            Arc::new(MockServiceNow::with_delay(config.ticket_delay)),
            Arc::new(MockVectorDb::with_delay(config.vector_delay)),
            generator,
        );

        Ok(Self::new(config, Arc::new(pipeline)))
    }
}
