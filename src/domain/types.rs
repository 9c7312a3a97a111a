//! # Domain Types
//!
//! Platform-neutral data structures for interactions, replies and guild members.
//! The Discord adapter converts serenity models into these at the edge.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A user as seen by command handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: u64,
    /// Plain username
    pub name: String,
    /// Display tag (`name` or `name#1234` for legacy accounts)
    pub tag: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}

/// A value supplied for a slash command option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    User(UserProfile),
}

/// A single inbound slash-command invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub options: HashMap<String, OptionValue>,
    pub user: UserProfile,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
}

impl Invocation {
    pub fn string_option(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn user_option(&self, name: &str) -> Option<&UserProfile> {
        match self.options.get(name) {
            Some(OptionValue::User(user)) => Some(user),
            _ => None,
        }
    }
}

/// A guild membership record.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    pub user: UserProfile,
    pub joined_at: Option<DateTime<Utc>>,
}

/// Whether the bot may kick or ban a given member, as the platform computes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModerationRights {
    pub kickable: bool,
    pub bannable: bool,
}

impl ModerationRights {
    pub fn permits(&self, action: ModerationAction) -> bool {
        match action {
            ModerationAction::Kick => self.kickable,
            ModerationAction::Ban => self.bannable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessage {
    pub author_id: u64,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Kick,
    Ban,
}

impl ModerationAction {
    pub fn as_str(&self) -> &str {
        match self {
            ModerationAction::Kick => "kick",
            ModerationAction::Ban => "ban",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich structured message payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            thumbnail: None,
            fields: Vec::new(),
        }
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Text(String),
    Embed(Embed),
}

/// An immediate reply to an interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub body: ReplyBody,
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            body: ReplyBody::Text(content.into()),
            ephemeral: false,
        }
    }

    /// Visible only to the invoking user
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            body: ReplyBody::Text(content.into()),
            ephemeral: true,
        }
    }

    pub fn embed(embed: Embed) -> Self {
        Self {
            body: ReplyBody::Embed(embed),
            ephemeral: false,
        }
    }
}
