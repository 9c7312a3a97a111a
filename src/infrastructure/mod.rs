//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., ReplyChannel, LlmProvider).

pub mod discord;
pub mod llm;
