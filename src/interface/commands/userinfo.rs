//! # User Info Command
//!
//! Handles `/userinfo`: renders account and membership dates for the target,
//! or for the invoking user when no target is given.

use crate::application::error::CommandError;
use crate::application::reply::ReplyHandle;
use crate::application::utils::calendar_date;
use crate::domain::traits::{GuildProvider, ReplyChannel};
use crate::domain::types::{Embed, GuildMember, Invocation, Reply};
use crate::strings::messages;

pub async fn handle_userinfo<R: ReplyChannel + ?Sized, G: GuildProvider + ?Sized>(
    guild: &G,
    invocation: &Invocation,
    reply: &mut ReplyHandle<'_, R>,
) -> Result<(), CommandError> {
    invocation.guild_id.ok_or(CommandError::NotInGuild)?;
    let target = invocation.user_option("target").unwrap_or(&invocation.user);

    let member = guild
        .member(target.id)
        .await
        .map_err(CommandError::Platform)?
        .ok_or(CommandError::MemberNotFound(target.id))?;

    reply.reply(Reply::embed(profile_embed(&member))).await?;
    Ok(())
}

fn profile_embed(member: &GuildMember) -> Embed {
    let joined = member
        .joined_at
        .as_ref()
        .map(calendar_date)
        .unwrap_or_else(|| messages::UNKNOWN_DATE.to_string());

    Embed::new(&member.user.tag, messages::USERINFO_COLOR)
        .thumbnail(&member.user.avatar_url)
        .field(messages::ACCOUNT_CREATED_FIELD, calendar_date(&member.user.created_at))
        .field(messages::JOINED_SERVER_FIELD, joined)
}
