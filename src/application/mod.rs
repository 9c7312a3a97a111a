//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot.
//! This includes the command catalog, routing, the reply protocol and error mapping.

pub mod catalog;
pub mod error;
pub mod reply;
pub mod router;
#[cfg(test)]
pub mod testing;
pub mod utils;
