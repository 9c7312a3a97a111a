//! # Templates
//!
//! Exposes the prompt templates from the `prompts/` directory.

pub const ANALYZE_TEMPLATE: &str = include_str!("../../prompts/analyze.md");
