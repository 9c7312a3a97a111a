//! # LLM Providers
//!
//! Provider implementations for the LLM API wrapper. Only Gemini is wired in;
//! `ProviderConfig` is the resolved, per-request view of the configuration.

pub mod gemini;

use crate::domain::config::GeminiConfig;
use crate::infrastructure::llm::Error;

/// Configuration for a provider
#[derive(Clone)]
pub struct ProviderConfig {
    /// API key
    pub api_key: String,
    /// Base URL (for non-default endpoints)
    pub base_url: Option<String>,
    /// Default model
    pub default_model: String,
}

impl ProviderConfig {
    /// Resolves the API key from the inline value or the named environment variable.
    pub fn from_gemini_config(config: &GeminiConfig) -> Result<Self, Error> {
        let api_key = if let Some(key) = &config.api_key {
            key.clone()
        } else {
            std::env::var(&config.api_key_env).map_err(|e| {
                Error::new(
                    gemini::PROVIDER,
                    format!("API key env var {} not set: {}", config.api_key_env, e),
                )
            })?
        };

        if api_key.trim().is_empty() {
            return Err(Error::new(gemini::PROVIDER, "API key is empty"));
        }

        Ok(Self {
            api_key,
            base_url: config.endpoint.clone(),
            default_model: config.model.clone(),
        })
    }
}
