//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Every section has defaults, so the bot also runs from environment variables alone.
//! Secrets are never stored inline by default: the config names the environment
//! variable to read them from.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the configuration file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to `null`, which serde_yaml rejects for structs.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Specific configuration for the Discord service.
#[derive(Debug, Deserialize, Clone)]
pub struct DiscordConfig {
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_application_id_env")]
    pub application_id_env: String,
    /// Register commands on this guild only instead of globally.
    #[serde(default)]
    pub guild_id: Option<u64>,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            application_id_env: default_application_id_env(),
            guild_id: None,
        }
    }
}

impl DiscordConfig {
    pub fn token(&self) -> Result<String> {
        read_env(&self.token_env)
    }

    /// The application id is optional: the gateway reports it on `ready`.
    pub fn application_id(&self) -> Result<Option<u64>> {
        match std::env::var(&self.application_id_env) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .map(Some)
                .with_context(|| {
                    format!("{} is not a valid application id", self.application_id_env)
                }),
            _ => Ok(None),
        }
    }
}

/// Configuration for the Gemini completion service.
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: None,
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout: default_timeout(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_file")]
    pub file: String,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

fn read_env(name: &str) -> Result<String> {
    let value =
        std::env::var(name).with_context(|| format!("Environment variable {name} not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Environment variable {name} is empty");
    }
    Ok(value)
}

fn default_token_env() -> String {
    "DISCORD_TOKEN".to_string()
}
fn default_application_id_env() -> String {
    "CLIENT_ID".to_string()
}
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_api_key_env() -> String {
    "GEMINI_KEY".to_string()
}
fn default_timeout() -> u64 {
    120
}
fn default_log_directory() -> String {
    "data".to_string()
}
fn default_log_file() -> String {
    "session.log".to_string()
}
fn default_log_filter() -> String {
    "info,serenity=warn,tracing::span=warn".to_string()
}
