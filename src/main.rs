//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: Discord, LLM
//! - Application: Catalog, Router, Reply lifecycle
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::application::router::CommandRouter;
use crate::domain::config::{AppConfig, LoggingConfig};
use crate::infrastructure::llm::Client as LlmClient;
use crate::strings::logs;

#[derive(Parser, Debug)]
#[command(version, about = "Discord slash-command bot backed by Gemini")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Environment & Configuration
    let env_loaded = dotenvy::dotenv().is_ok();
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;

    // 2. Logging Setup
    let _guard = init_logging(&config.logging)?;

    tracing::info!("{}", logs::STARTING);
    if env_loaded {
        tracing::info!("{}", logs::ENV_LOADED);
    }
    tracing::info!(
        "{}",
        logs::config_loaded(&args.config.display().to_string(), &config.gemini.model)
    );

    // 3. LLM
    let llm = LlmClient::new(config.gemini.clone()).context("Failed to create LLM client")?;
    let llm = Arc::new(llm);

    // 4. Application Components
    let router = Arc::new(CommandRouter::new(llm));

    // 5. Discord
    if let Err(e) = infrastructure::discord::run(&config.discord, router).await {
        tracing::error!("{}", logs::client_error(&format!("{e:#}")));
        return Err(e);
    }
    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let directory = Path::new(&config.directory);
    if !directory.exists() {
        fs::create_dir_all(directory).context("Failed to create log directory")?;
    }

    // Clear previous session log
    let log_path = directory.join(&config.file);
    if log_path.exists() {
        let _ = fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(directory, &config.file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.filter));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(guard)
}
