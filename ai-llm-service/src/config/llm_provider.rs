use std::{fmt, str::FromStr};

use crate::error_handler::ConfigError;

/// Backend used to generate chat answers.
///
/// `Mock` keeps the canned, fixed-latency generator wired in by the binary.
/// `Ollama` talks to a local Ollama runtime over HTTP.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmProvider;
///
/// let p: LlmProvider = "OLLAMA".parse().unwrap();
/// assert_eq!(p, LlmProvider::Ollama);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Canned responses, no network.
    #[default]
    Mock,
    /// Local Ollama runtime for on-device inference.
    Ollama,
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(LlmProvider::Mock),
            "ollama" => Ok(LlmProvider::Ollama),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::Mock => f.write_str("mock"),
            LlmProvider::Ollama => f.write_str("ollama"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Mock ".parse::<LlmProvider>(), Ok(LlmProvider::Mock));
        assert_eq!("ollama".parse::<LlmProvider>(), Ok(LlmProvider::Ollama));
    }

    #[test]
    fn rejects_unknown_provider() {
        assert_eq!(
            "chatgpt".parse::<LlmProvider>(),
            Err(ConfigError::UnsupportedProvider("chatgpt".into()))
        );
    }
}
