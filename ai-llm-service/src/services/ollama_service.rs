//! Lightweight Ollama client for grounded answer generation.
//!
//! Implements a thin client for `POST {endpoint}/api/generate` with
//! `stream=false`, configured from [`LlmModelConfig`].
//!
//! # Examples
//!
//! ```no_run
//! use ai_llm_service::{LlmModelConfig, LlmProvider, OllamaService};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = LlmModelConfig {
//!     provider: LlmProvider::Ollama,
//!     model: "qwen3:14b".into(),
//!     endpoint: "http://localhost:11434".into(),
//!     max_tokens: Some(256),
//!     temperature: Some(0.2),
//!     timeout_secs: Some(30),
//! };
//!
//! let svc = OllamaService::new(cfg)?;
//! let text = svc.generate("Is the printer on fire?").await?;
//! println!("{text}");
//! # Ok(()) }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, ConfigError, Result},
};

/// Default HTTP timeout when the config does not set one.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Maximum number of characters of an error body kept for diagnostics.
const SNIPPET_CHARS: usize = 240;

/// Thin client for Ollama.
///
/// Reuses one HTTP client with the configured timeout.
#[derive(Debug)]
pub struct OllamaService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl OllamaService {
    /// Creates a new [`OllamaService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::UnsupportedProvider`] if `cfg.provider` is not `Ollama`
    /// - [`ConfigError::InvalidFormat`] if `cfg.endpoint` is not http(s)
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        if cfg.provider != LlmProvider::Ollama {
            return Err(ConfigError::UnsupportedProvider(cfg.provider.to_string()).into());
        }
        cfg.validate()?;

        let timeout = Duration::from_secs(cfg.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .brotli(true)
            .build()?;

        let url_generate = generate_url(&cfg.endpoint);

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    /// Model this client generates with.
    pub fn model(&self) -> &str {
        &self.cfg.model
    }

    /// Performs a **non-streaming** generation request via `/api/generate`.
    ///
    /// # Errors
    /// - [`AiLlmError::HttpStatus`] for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] for client errors
    /// - [`AiLlmError::Decode`] if the response cannot be parsed
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest::from_cfg(&self.cfg, prompt);

        debug!("POST {}", self.url_generate);
        let resp = self
            .client
            .post(&self.url_generate)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AiLlmError::HttpStatus {
                status,
                url: self.url_generate.clone(),
                snippet: snippet(&text),
            });
        }

        let bytes = resp.bytes().await?;
        decode_generate(&bytes)
    }
}

fn generate_url(endpoint: &str) -> String {
    format!("{}/api/generate", endpoint.trim().trim_end_matches('/'))
}

fn snippet(text: &str) -> String {
    text.trim().chars().take(SNIPPET_CHARS).collect()
}

fn decode_generate(bytes: &[u8]) -> Result<String> {
    let out: GenerateResponse = serde_json::from_slice(bytes).map_err(|e| {
        AiLlmError::Decode(format!("serde error: {e}; ensure `stream=false` is used"))
    })?;
    Ok(out.response)
}

/* ==========================
HTTP payloads
========================== */

/// Request body for `/api/generate` (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

impl<'a> GenerateRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        let options = GenerateOptions {
            temperature: cfg.temperature,
            num_predict: cfg.max_tokens,
        };
        let options = (options.temperature.is_some() || options.num_predict.is_some())
            .then_some(options);

        Self {
            model: &cfg.model,
            prompt,
            stream: false,
            options,
        }
    }
}

/// Subset of Ollama `options`.
#[derive(Debug, Default, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Response body for `/api/generate`; the generated text is in `response`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ollama_cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "qwen3:14b".into(),
            endpoint: "http://localhost:11434/".into(),
            max_tokens: None,
            temperature: None,
            timeout_secs: Some(5),
        }
    }

    #[test]
    fn new_rejects_mock_provider() {
        let cfg = LlmModelConfig {
            provider: LlmProvider::Mock,
            ..ollama_cfg()
        };
        let err = OllamaService::new(cfg).unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Config(ConfigError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn new_rejects_bad_endpoint() {
        let cfg = LlmModelConfig {
            endpoint: "localhost:11434".into(),
            ..ollama_cfg()
        };
        assert!(OllamaService::new(cfg).is_err());
    }

    #[test]
    fn url_is_normalized() {
        let svc = OllamaService::new(ollama_cfg()).unwrap();
        assert_eq!(svc.url_generate, "http://localhost:11434/api/generate");
        assert_eq!(svc.model(), "qwen3:14b");
    }

    #[test]
    fn request_omits_empty_options() {
        let cfg = ollama_cfg();
        let body = serde_json::to_value(GenerateRequest::from_cfg(&cfg, "hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "model": "qwen3:14b", "prompt": "hi", "stream": false })
        );

        let cfg = LlmModelConfig {
            max_tokens: Some(128),
            ..ollama_cfg()
        };
        let body = serde_json::to_value(GenerateRequest::from_cfg(&cfg, "hi")).unwrap();
        assert_eq!(body["options"], serde_json::json!({ "num_predict": 128 }));
    }

    #[test]
    fn decode_reads_response_field() {
        let text = decode_generate(br#"{"model":"m","response":"INC12345 is open","done":true}"#)
            .unwrap();
        assert_eq!(text, "INC12345 is open");

        let err = decode_generate(br#"{"done":true}"#).unwrap_err();
        assert!(matches!(err, AiLlmError::Decode(_)));
    }

    #[test]
    fn snippet_is_trimmed_and_bounded() {
        let long = format!("  {}  ", "x".repeat(1000));
        assert_eq!(snippet(&long).len(), SNIPPET_CHARS);
    }
}
