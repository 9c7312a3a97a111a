//! # LLM Client
//!
//! Provides the `Client` struct, the single entry point for completions.
//! It owns the HTTP connection pool and the Gemini settings, and resolves the API key per request.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::config::GeminiConfig;
use crate::domain::traits::LlmProvider;
use crate::infrastructure::llm::providers::{self, ProviderConfig};
use crate::infrastructure::llm::{Context, Error, Response};

/// Simple LLM client
pub struct Client {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client from the Gemini configuration
    pub fn new(config: GeminiConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| {
                Error::new(
                    providers::gemini::PROVIDER,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;
        Ok(Self { config, http })
    }

    /// Send a single prompt with the configured model
    pub async fn prompt(&self, prompt: &str) -> Result<Response, Error> {
        let provider_config = ProviderConfig::from_gemini_config(&self.config)?;

        let context = Context::prompt(prompt)
            .with_model(self.config.model.clone())
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_output_tokens);

        let response = providers::gemini::chat(&self.http, provider_config, context).await?;
        tracing::debug!(
            "{} answered with {} tokens ({} prompt, {} total)",
            response.model,
            response.usage.completion_tokens,
            response.usage.prompt_tokens,
            response.usage.total_tokens
        );
        Ok(response)
    }
}

#[async_trait]
impl LlmProvider for Client {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        self.prompt(prompt)
            .await
            .map(|r| r.content)
            .map_err(|e| e.to_string())
    }
}
