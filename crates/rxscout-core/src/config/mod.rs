//! Configuration management for rxscout.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `rxscout.toml` file
//! 3. User config `~/.config/rxscout/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration.
    pub llm: LLMConfig,

    /// Evidence provider configuration.
    pub evidence: EvidenceConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./rxscout.toml` (project local)
    /// 2. `~/.config/rxscout/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("rxscout.toml").exists() {
            return Self::from_file("rxscout.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("rxscout").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults, still honoring env overrides
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        // LLM overrides
        if let Ok(provider) = std::env::var("RXSCOUT_LLM_PROVIDER") {
            self.llm.provider = provider;
        }
        if let Ok(model) = std::env::var("RXSCOUT_LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Ok(url) = std::env::var("RXSCOUT_LLM_BASE_URL") {
            self.llm.base_url = Some(url);
        }
        if let Ok(key) = std::env::var("RXSCOUT_LLM_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Ok(tokens) = std::env::var("RXSCOUT_LLM_MAX_TOKENS") {
            if let Ok(n) = tokens.parse() {
                self.llm.max_tokens = n;
            }
        }

        // Evidence overrides
        if let Ok(max) = std::env::var("RXSCOUT_MAX_RESULTS") {
            if let Ok(n) = max.parse() {
                self.evidence.max_results_per_source = n;
            }
        }
        if let Ok(agent) = std::env::var("RXSCOUT_USER_AGENT") {
            self.evidence.user_agent = agent;
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LLMConfig {
    /// Provider name: "openrouter", "openai", "anthropic", or "ollama".
    pub provider: String,

    /// Model name (provider-specific).
    pub model: Option<String>,

    /// Base URL for API (for openai-compatible providers).
    pub base_url: Option<String>,

    /// API key (can also be set via environment variable).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Maximum tokens for response.
    pub max_tokens: u32,

    /// API version (for Anthropic).
    pub api_version: Option<String>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_LLM_PROVIDER.to_string(),
            model: None, // Use provider default
            base_url: None, // Use provider default
            api_key: None, // Load from env
            max_tokens: DEFAULT_MAX_TOKENS,
            api_version: Some(DEFAULT_ANTHROPIC_API_VERSION.to_string()),
        }
    }
}

impl LLMConfig {
    /// Get the model name, falling back to provider defaults.
    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| {
            match self.provider.as_str() {
                "anthropic" | "claude" => DEFAULT_ANTHROPIC_MODEL.to_string(),
                "ollama" => DEFAULT_OLLAMA_MODEL.to_string(),
                "openrouter" => DEFAULT_OPENROUTER_MODEL.to_string(),
                _ => DEFAULT_OPENAI_MODEL.to_string(),
            }
        })
    }

    /// Get the base URL, falling back to provider defaults.
    pub fn base_url_or_default(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            match self.provider.as_str() {
                "anthropic" | "claude" => DEFAULT_ANTHROPIC_URL.to_string(),
                "ollama" => DEFAULT_OLLAMA_URL.to_string(),
                "openrouter" => DEFAULT_OPENROUTER_URL.to_string(),
                _ => DEFAULT_OPENAI_URL.to_string(),
            }
        })
    }

    /// Get API key from config or environment.
    pub fn api_key_or_env(&self) -> Option<String> {
        self.api_key.clone()
            .or_else(|| std::env::var("RXSCOUT_LLM_API_KEY").ok())
            .or_else(|| match self.provider.as_str() {
                "anthropic" | "claude" => std::env::var("ANTHROPIC_API_KEY").ok(),
                "openai" => std::env::var("OPENAI_API_KEY").ok(),
                "openrouter" => std::env::var("OPENROUTER_API_KEY").ok(),
                _ => std::env::var("OPENAI_API_KEY").ok(),
            })
    }
}

/// Evidence provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Maximum results requested from each evidence source.
    pub max_results_per_source: usize,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// User agent sent with provider requests.
    pub user_agent: String,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            max_results_per_source: DEFAULT_MAX_RESULTS_PER_SOURCE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.provider, DEFAULT_LLM_PROVIDER);
        assert_eq!(config.llm.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.evidence.max_results_per_source, DEFAULT_MAX_RESULTS_PER_SOURCE);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[llm]"));
        assert!(toml_str.contains("[evidence]"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[llm]
provider = "ollama"
model = "llama3"

[evidence]
max_results_per_source = 3
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.provider, "ollama");
        assert_eq!(config.llm.model, Some("llama3".to_string()));
        assert_eq!(config.evidence.max_results_per_source, 3);
    }

    #[test]
    fn test_model_or_default() {
        let mut config = LLMConfig::default();

        config.provider = "anthropic".to_string();
        assert_eq!(config.model_or_default(), DEFAULT_ANTHROPIC_MODEL);

        config.provider = "openrouter".to_string();
        assert_eq!(config.model_or_default(), DEFAULT_OPENROUTER_MODEL);

        config.provider = "openai".to_string();
        assert_eq!(config.model_or_default(), DEFAULT_OPENAI_MODEL);

        config.model = Some("custom-model".to_string());
        assert_eq!(config.model_or_default(), "custom-model");
    }

    #[test]
    fn test_base_url_or_default() {
        let mut config = LLMConfig::default();

        config.provider = "openrouter".to_string();
        assert_eq!(config.base_url_or_default(), DEFAULT_OPENROUTER_URL);

        config.base_url = Some("http://localhost:8080/v1".to_string());
        assert_eq!(config.base_url_or_default(), "http://localhost:8080/v1");
    }
}
