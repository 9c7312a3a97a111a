//! Simple LLM API wrapper for Google Gemini
//!
//! One stateless `generateContent` call per prompt: no retries, no streaming,
//! no conversation history.
//!
//! ```rust,ignore
//! let client = Client::new(config.gemini.clone())?;
//! let response = client.prompt("Hello, world!").await?;
//! println!("Response: {}", response.content);
//! ```

mod client;
pub mod providers;
mod types;

pub use client::Client;

pub use types::{Context, Error, Response, TokenUsage};
