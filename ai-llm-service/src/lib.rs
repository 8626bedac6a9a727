//! Language-model client used to turn a query plus grounding context into an answer.
//!
//! - [`LlmModelConfig`] / [`LlmProvider`]: env-driven model selection.
//! - [`OllamaService`]: non-streaming generation against a local Ollama runtime.
//! - [`AiLlmError`]: unified error type for the crate.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
pub use error_handler::{AiLlmError, ConfigError};
pub use services::ollama_service::OllamaService;
