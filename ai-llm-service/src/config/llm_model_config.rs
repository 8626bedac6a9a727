use crate::{
    config::llm_provider::LlmProvider,
    error_handler::{ConfigError, Result, validate_http_endpoint, validate_range_f32},
};

/// Configuration for the generation model.
///
/// # Fields
///
/// - `provider`: which backend to use.
/// - `model`: model identifier (e.g. `"qwen3:14b"`).
/// - `endpoint`: inference endpoint (e.g. `"http://localhost:11434"`).
/// - `max_tokens`: maximum number of tokens to generate (if supported).
/// - `temperature`: sampling temperature.
/// - `timeout_secs`: request timeout for the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Checks the fields a network-backed provider depends on.
    ///
    /// The mock provider never touches the network, so only the model name
    /// is checked for it.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyModel`] for a blank model name
    /// - [`ConfigError::InvalidFormat`] for a non-http(s) endpoint
    /// - [`ConfigError::OutOfRange`] for a temperature outside `0.0..=2.0`
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        if self.provider == LlmProvider::Mock {
            return Ok(());
        }
        validate_http_endpoint("OLLAMA_URL", &self.endpoint)?;
        if let Some(t) = self.temperature {
            validate_range_f32("temperature", t, 0.0, 2.0)?;
        }
        Ok(())
    }
}
