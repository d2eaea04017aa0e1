//! Server configuration
//!
//! Read once at startup from shuttle secrets.

use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt2";
pub const DEFAULT_MAX_LENGTH: u32 = 300;
const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Configuration for the text generation endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Model identifier, also used to derive the default endpoint
    pub model: String,
    /// Inference endpoint URL
    pub endpoint: String,
    /// Bearer token for the inference endpoint
    pub api_token: Option<String>,
    /// Maximum output length passed with every request
    pub max_length: u32,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: format!("{HF_INFERENCE_BASE}/{DEFAULT_MODEL}"),
            api_token: None,
            max_length: DEFAULT_MAX_LENGTH,
            timeout: None,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// API key for Bearer auth; `None` disables auth
    pub api_key: Option<String>,
    pub generation: GenerationConfig,
}

impl AppConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model = get("TEXT_GEN_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let endpoint = get("TEXT_GEN_URL").unwrap_or_else(|| format!("{HF_INFERENCE_BASE}/{model}"));

        let max_length = match get("TEXT_GEN_MAX_LENGTH").map(|v| v.parse::<u32>()) {
            Some(Ok(n)) if n > 0 => n,
            Some(_) => {
                tracing::warn!(
                    "Invalid TEXT_GEN_MAX_LENGTH, using default {}",
                    DEFAULT_MAX_LENGTH
                );
                DEFAULT_MAX_LENGTH
            }
            None => DEFAULT_MAX_LENGTH,
        };

        let timeout = match get("TEXT_GEN_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Some(Duration::from_secs(secs)),
            Some(_) => {
                tracing::warn!("Invalid TEXT_GEN_TIMEOUT_SECS, generation will not time out");
                None
            }
            None => None,
        };

        Self {
            api_key: get("RECIPEGEN_API_KEY"),
            generation: GenerationConfig {
                model,
                endpoint,
                api_token: get("TEXT_GEN_API_TOKEN"),
                max_length,
                timeout,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generation.max_length, 300);
        assert_eq!(
            config.generation.endpoint,
            "https://api-inference.huggingface.co/models/gpt2"
        );
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_endpoint_follows_model() {
        let config = config_from(&[("TEXT_GEN_MODEL", "distilgpt2")]);
        assert_eq!(
            config.generation.endpoint,
            "https://api-inference.huggingface.co/models/distilgpt2"
        );
    }

    #[test]
    fn test_explicit_values() {
        let config = config_from(&[
            ("RECIPEGEN_API_KEY", "secret"),
            ("TEXT_GEN_URL", "http://localhost:8080/generate"),
            ("TEXT_GEN_API_TOKEN", "hf_token"),
            ("TEXT_GEN_MAX_LENGTH", "120"),
            ("TEXT_GEN_TIMEOUT_SECS", "45"),
        ]);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.generation.endpoint, "http://localhost:8080/generate");
        assert_eq!(config.generation.api_token.as_deref(), Some("hf_token"));
        assert_eq!(config.generation.max_length, 120);
        assert_eq!(config.generation.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[
            ("TEXT_GEN_MAX_LENGTH", "lots"),
            ("TEXT_GEN_TIMEOUT_SECS", "0"),
            ("RECIPEGEN_API_KEY", "   "),
        ]);
        assert_eq!(config.generation.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.generation.timeout, None);
        assert!(config.api_key.is_none());
    }
}
