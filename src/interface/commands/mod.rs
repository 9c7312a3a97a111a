//! # Command Handlers
//!
//! Contains specific handler functions for each slash command (e.g., /ask, /kick, /userinfo).
//! These handlers are invoked by the Router.

pub mod analyze;
pub mod ask;
pub mod fun;
pub mod moderation;
pub mod userinfo;
