//! Generation model config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `LLM_KIND`         = provider kind (`mock` or `ollama`, default `mock`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (f32)
//! - `LLM_TIMEOUT_SECS` = optional HTTP timeout (u64)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (defaults to `http://localhost:11434`)
//! - `OLLAMA_MODEL`                = model name (mandatory for `ollama`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{ConfigError, Result, env_opt, opt_f32, opt_u32, opt_u64, required},
};

/// Ollama's default listening port.
pub const DEFAULT_OLLAMA_PORT: u16 = 11434;

/// Model label reported by the mock provider.
pub const MOCK_MODEL: &str = "mock";

impl LlmModelConfig {
    /// Builds the generation config from the process environment.
    ///
    /// # Errors
    /// Propagates parse/validation errors, see [`LlmModelConfig::from_lookup`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env_opt)
    }

    /// Builds the generation config from an arbitrary key lookup.
    ///
    /// # Errors
    /// - [`ConfigError::UnsupportedProvider`] for an unknown `LLM_KIND`
    /// - [`ConfigError::MissingVar`] when `OLLAMA_MODEL` is missing for Ollama
    /// - [`ConfigError::InvalidNumber`] for malformed numeric variables
    /// - any error from [`LlmModelConfig::validate`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("LLM_KIND") {
            Some(kind) => kind.parse::<LlmProvider>()?,
            None => LlmProvider::default(),
        };

        let model = match provider {
            LlmProvider::Mock => lookup("OLLAMA_MODEL").unwrap_or_else(|| MOCK_MODEL.into()),
            LlmProvider::Ollama => required("OLLAMA_MODEL", lookup("OLLAMA_MODEL"))?,
        };

        let cfg = LlmModelConfig {
            provider,
            model,
            endpoint: ollama_endpoint(&lookup)?,
            max_tokens: opt_u32("LLM_MAX_TOKENS", lookup("LLM_MAX_TOKENS"))?,
            temperature: opt_f32("LLM_TEMPERATURE", lookup("LLM_TEMPERATURE"))?,
            timeout_secs: opt_u64("LLM_TIMEOUT_SECS", lookup("LLM_TIMEOUT_SECS"))?,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Resolves the Ollama endpoint.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. `http://localhost:11434`
fn ollama_endpoint<F>(lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("OLLAMA_URL").filter(|u| !u.trim().is_empty()) {
        return Ok(url.trim().to_string());
    }
    let port = match lookup("OLLAMA_PORT").filter(|p| !p.trim().is_empty()) {
        Some(p) => p
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "OLLAMA_PORT",
                reason: "expected u16 (1..=65535)",
            })?,
        None => DEFAULT_OLLAMA_PORT,
    };
    Ok(format!("http://localhost:{port}"))
}
