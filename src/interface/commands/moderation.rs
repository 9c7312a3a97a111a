//! # Moderation Commands
//!
//! Handles `/kick` and `/ban`. The target must resolve to a guild member the bot
//! outranks for the action; otherwise the invoker gets an ephemeral refusal and
//! nothing is attempted.

use crate::application::error::CommandError;
use crate::application::reply::ReplyHandle;
use crate::domain::traits::{GuildProvider, ReplyChannel};
use crate::domain::types::{Invocation, ModerationAction, Reply};
use crate::strings::{logs, messages};

pub async fn handle_moderation<R: ReplyChannel + ?Sized, G: GuildProvider + ?Sized>(
    action: ModerationAction,
    guild: &G,
    invocation: &Invocation,
    reply: &mut ReplyHandle<'_, R>,
) -> Result<(), CommandError> {
    let guild_id = invocation.guild_id.ok_or(CommandError::NotInGuild)?;
    let target = invocation
        .user_option("target")
        .ok_or(CommandError::MissingOption("target"))?;

    let member = guild
        .member(target.id)
        .await
        .map_err(CommandError::Platform)?
        .ok_or(CommandError::MemberNotFound(target.id))?;

    let rights = guild
        .moderation_rights(member.user.id)
        .await
        .map_err(CommandError::Platform)?;

    if !rights.permits(action) {
        reply.reply(Reply::ephemeral(refusal(action))).await?;
        return Ok(());
    }

    guild
        .moderate(action, member.user.id)
        .await
        .map_err(CommandError::Platform)?;
    tracing::info!("{}", logs::moderation_done(action.as_str(), &member.user.tag, guild_id));

    reply.reply(Reply::text(confirmation(action, &member.user.tag))).await?;
    Ok(())
}

fn refusal(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Kick => messages::KICK_REFUSED,
        ModerationAction::Ban => messages::BAN_REFUSED,
    }
}

fn confirmation(action: ModerationAction, tag: &str) -> String {
    match action {
        ModerationAction::Kick => messages::kicked(tag),
        ModerationAction::Ban => messages::banned(tag),
    }
}
