//! # Strings Module
//!
//! Centralizes user-facing strings, prompts, and log lines.
//! Ensures consistency in messaging and easier localization/updates.

pub mod logs;
pub mod messages;
pub mod prompts;
pub mod templates;
