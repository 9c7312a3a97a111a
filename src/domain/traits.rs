//! # Domain Traits
//!
//! Abstract interfaces for core system components (Reply, Guild, LLM).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::types::{ChannelMessage, GuildMember, ModerationAction, ModerationRights, Reply};

/// Transport for answering a single interaction.
///
/// Implementations only forward calls to the platform; ordering rules
/// (defer once, finalize once) are enforced by `application::reply::ReplyHandle`.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    /// Acknowledge the interaction and show a pending indicator
    async fn defer(&self) -> Result<(), String>;

    /// Replace the pending indicator of a deferred interaction
    async fn edit_deferred(&self, content: &str) -> Result<(), String>;

    /// Send an immediate reply
    async fn respond(&self, reply: &Reply) -> Result<(), String>;
}

/// Guild and channel lookups scoped to the interaction's origin.
#[async_trait]
pub trait GuildProvider: Send + Sync {
    /// Most recent messages in the invoking channel, newest first
    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, String>;

    /// Membership record of a user, `None` if they are not in the guild
    async fn member(&self, user_id: u64) -> Result<Option<GuildMember>, String>;

    /// Whether the bot may kick or ban the member, from role hierarchy and its own permissions
    async fn moderation_rights(&self, user_id: u64) -> Result<ModerationRights, String>;

    async fn moderate(&self, action: ModerationAction, user_id: u64) -> Result<(), String>;
}

/// Abstract interface for an LLM Provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
