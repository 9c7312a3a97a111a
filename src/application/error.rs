//! # Command Errors
//!
//! The closed set of reasons a command handler can fail. The router logs the
//! error and maps it to a fixed user-facing message; error details never
//! reach the user.

use thiserror::Error;

use crate::application::catalog::CommandKind;
use crate::application::reply::ReplyError;
use crate::strings::messages;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("missing required option `{0}`")]
    MissingOption(&'static str),
    #[error("command requires a guild")]
    NotInGuild,
    #[error("user {0} is not a member of this guild")]
    MemberNotFound(u64),
    #[error("AI request failed: {0}")]
    Ai(String),
    #[error("platform request failed: {0}")]
    Platform(String),
    #[error(transparent)]
    Reply(#[from] ReplyError),
}

impl CommandError {
    pub fn user_message(&self, kind: CommandKind) -> &'static str {
        match self {
            CommandError::NotInGuild => messages::GUILD_ONLY,
            CommandError::MemberNotFound(_) => messages::MEMBER_NOT_FOUND,
            // The command's own work may already have happened.
            CommandError::Reply(_) => messages::GENERIC_FAILED,
            _ => kind.failure_message(),
        }
    }
}
