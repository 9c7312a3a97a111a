//! # Interface Layer
//!
//! User-facing entry points: one handler per slash command.

pub mod commands;
