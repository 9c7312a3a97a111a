//! # Discord Interaction Adapter
//!
//! Implements `ReplyChannel` and `GuildProvider` for one serenity `CommandInteraction`.
//! This is the bridge between the platform-neutral handlers and the serenity HTTP API;
//! serenity models are converted to domain types here and nowhere else.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::all::{
    Cache, CommandInteraction, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, GetMessages, GuildId, Http,
    Permissions, ResolvedValue, RoleId, Timestamp, User, UserId,
};
use serenity::http::HttpError;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::traits::{GuildProvider, ReplyChannel};
use crate::domain::types::{
    ChannelMessage, Embed, GuildMember, Invocation, ModerationAction, ModerationRights,
    OptionValue, Reply, ReplyBody, UserProfile,
};
use crate::infrastructure::discord::hierarchy::{self, Standing};

pub struct DiscordInteraction {
    http: Arc<Http>,
    cache: Arc<Cache>,
    command: CommandInteraction,
    bot_id: UserId,
}

/// Membership data Discord ships inside the interaction payload.
struct PayloadMember<'a> {
    user: &'a User,
    roles: &'a [RoleId],
    joined_at: Option<Timestamp>,
}

/// Inputs of the role-hierarchy check.
struct Positions {
    owner_id: UserId,
    target: Standing,
    bot: Standing,
}

impl DiscordInteraction {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>, command: CommandInteraction) -> Self {
        let bot_id = cache.current_user().id;
        Self {
            http,
            cache,
            command,
            bot_id,
        }
    }

    /// Snapshot of the interaction in domain terms.
    pub fn invocation(&self) -> Invocation {
        let mut options = HashMap::new();
        for option in self.command.data.options() {
            let value = match option.value {
                ResolvedValue::String(text) => OptionValue::String(text.to_string()),
                ResolvedValue::User(user, _) => OptionValue::User(profile(user)),
                _ => continue,
            };
            options.insert(option.name.to_string(), value);
        }

        Invocation {
            command: self.command.data.name.clone(),
            options,
            user: profile(&self.command.user),
            channel_id: self.command.channel_id.get(),
            guild_id: self.command.guild_id.map(|id| id.get()),
        }
    }

    fn guild_id(&self) -> Result<GuildId, String> {
        self.command
            .guild_id
            .ok_or_else(|| "interaction did not originate in a guild".to_string())
    }

    /// The invoker's member object, or a member resolved from a user option.
    fn payload_member(&self, user_id: UserId) -> Option<PayloadMember<'_>> {
        if let Some(member) = self.command.member.as_deref() {
            if member.user.id == user_id {
                return Some(PayloadMember {
                    user: &member.user,
                    roles: &member.roles,
                    joined_at: member.joined_at,
                });
            }
        }

        let resolved = &self.command.data.resolved;
        let partial = resolved.members.get(&user_id)?;
        let user = resolved.users.get(&user_id)?;
        Some(PayloadMember {
            user,
            roles: &partial.roles,
            joined_at: partial.joined_at,
        })
    }

    /// Owner, roles and the bot's member all come from the gateway cache.
    fn cached_positions(&self, guild_id: GuildId, target: UserId) -> Option<Positions> {
        let guild = self.cache.guild(guild_id)?;
        let bot = guild.members.get(&self.bot_id)?;
        let target_roles = match self.payload_member(target) {
            Some(record) => record.roles,
            None => guild.members.get(&target)?.roles.as_slice(),
        };

        Some(Positions {
            owner_id: guild.owner_id,
            target: Standing::new(target, target_roles, &guild.roles),
            bot: Standing::new(self.bot_id, &bot.roles, &guild.roles),
        })
    }

    /// REST fallback for guilds missing from the cache.
    async fn fetch_positions(
        &self,
        guild_id: GuildId,
        target: UserId,
    ) -> serenity::Result<Positions> {
        let http = self.http.as_ref();
        let (guild, bot) = tokio::try_join!(
            guild_id.to_partial_guild(http),
            guild_id.member(http, self.bot_id),
        )?;
        let target_roles = match self.payload_member(target) {
            Some(record) => record.roles.to_vec(),
            None => guild_id.member(http, target).await?.roles,
        };

        Ok(Positions {
            owner_id: guild.owner_id,
            target: Standing::new(target, &target_roles, &guild.roles),
            bot: Standing::new(self.bot_id, &bot.roles, &guild.roles),
        })
    }
}

pub fn profile(user: &User) -> UserProfile {
    UserProfile {
        id: user.id.get(),
        name: user.name.clone(),
        tag: user.tag(),
        avatar_url: user.face(),
        created_at: to_utc(user.id.created_at()).unwrap_or_default(),
    }
}

fn to_utc(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0)
}

fn create_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(&embed.title).color(embed.color);
    if let Some(url) = &embed.thumbnail {
        builder = builder.thumbnail(url);
    }
    for field in &embed.fields {
        builder = builder.field(&field.name, &field.value, field.inline);
    }
    builder
}

fn http_status(err: &serenity::Error) -> Option<u16> {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            Some(response.status_code.as_u16())
        }
        _ => None,
    }
}

/// Only a 404 means "no such member"; every other failure is a platform error.
fn is_absent(status: Option<u16>) -> bool {
    status == Some(404)
}

fn is_not_found(err: &serenity::Error) -> bool {
    is_absent(http_status(err))
}

#[async_trait]
impl ReplyChannel for DiscordInteraction {
    async fn defer(&self) -> Result<(), String> {
        self.command
            .defer(self.http.as_ref())
            .await
            .map_err(|e| e.to_string())
    }

    async fn edit_deferred(&self, content: &str) -> Result<(), String> {
        self.command
            .edit_response(self.http.as_ref(), EditInteractionResponse::new().content(content))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn respond(&self, reply: &Reply) -> Result<(), String> {
        let mut message = CreateInteractionResponseMessage::new();
        if reply.ephemeral {
            message = message.ephemeral(true);
        }
        message = match &reply.body {
            ReplyBody::Text(content) => message.content(content),
            ReplyBody::Embed(embed) => message.embed(create_embed(embed)),
        };

        self.command
            .create_response(self.http.as_ref(), CreateInteractionResponse::Message(message))
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl GuildProvider for DiscordInteraction {
    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, String> {
        let messages = self
            .command
            .channel_id
            .messages(self.http.as_ref(), GetMessages::new().limit(limit))
            .await
            .map_err(|e| e.to_string())?;

        Ok(messages
            .into_iter()
            .map(|msg| ChannelMessage {
                author_id: msg.author.id.get(),
                content: msg.content,
            })
            .collect())
    }

    async fn member(&self, user_id: u64) -> Result<Option<GuildMember>, String> {
        let user_id = UserId::new(user_id);
        if let Some(record) = self.payload_member(user_id) {
            return Ok(Some(GuildMember {
                user: profile(record.user),
                joined_at: record.joined_at.and_then(to_utc),
            }));
        }

        let guild_id = self.guild_id()?;
        match guild_id.member(self.http.as_ref(), user_id).await {
            Ok(member) => Ok(Some(GuildMember {
                user: profile(&member.user),
                joined_at: member.joined_at.and_then(to_utc),
            })),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }

    async fn moderation_rights(&self, user_id: u64) -> Result<ModerationRights, String> {
        let guild_id = self.guild_id()?;
        let target = UserId::new(user_id);

        let positions = match self.cached_positions(guild_id, target) {
            Some(positions) => positions,
            None => self
                .fetch_positions(guild_id, target)
                .await
                .map_err(|e| e.to_string())?,
        };

        Ok(hierarchy::moderation_rights(
            positions.target,
            positions.bot,
            positions.owner_id,
            self.command.app_permissions.unwrap_or_else(Permissions::empty),
        ))
    }

    async fn moderate(&self, action: ModerationAction, user_id: u64) -> Result<(), String> {
        let guild_id = self.guild_id()?;
        let user = UserId::new(user_id);
        let result = match action {
            ModerationAction::Kick => guild_id.kick(self.http.as_ref(), user).await,
            ModerationAction::Ban => guild_id.ban(self.http.as_ref(), user, 0).await,
        };
        result.map_err(|e| e.to_string())
    }
}
