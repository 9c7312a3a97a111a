//! # Analyze Command
//!
//! Handles `/analyze`: collects the target's messages from recent channel
//! history and asks the LLM for a short personality summary.

use crate::application::error::CommandError;
use crate::application::reply::ReplyHandle;
use crate::application::utils::truncate_chars;
use crate::domain::traits::{GuildProvider, LlmProvider, ReplyChannel};
use crate::domain::types::{ChannelMessage, Invocation};
use crate::interface::commands::ask::MAX_ANSWER_CHARS;
use crate::strings::{messages, prompts};

/// How many channel messages are scanned for the target's authorship.
pub const HISTORY_LIMIT: u8 = 50;

pub async fn handle_analyze<R: ReplyChannel + ?Sized, G: GuildProvider + ?Sized>(
    llm: &dyn LlmProvider,
    guild: &G,
    invocation: &Invocation,
    reply: &mut ReplyHandle<'_, R>,
) -> Result<(), CommandError> {
    reply.defer().await?;

    let target = invocation
        .user_option("target")
        .ok_or(CommandError::MissingOption("target"))?;

    let history = guild
        .recent_messages(HISTORY_LIMIT)
        .await
        .map_err(CommandError::Platform)?;

    let text = messages_by(&history, target.id);
    if text.is_empty() {
        reply.finalize(messages::NO_RECENT_MESSAGES).await?;
        return Ok(());
    }

    let analysis = llm
        .generate(&prompts::analyze_prompt(&text))
        .await
        .map_err(CommandError::Ai)?;

    reply
        .finalize(&messages::analysis_result(
            &target.name,
            &truncate_chars(&analysis, MAX_ANSWER_CHARS),
        ))
        .await?;
    Ok(())
}

/// Contents of messages written by `author_id`, newline-joined in history order.
fn messages_by(history: &[ChannelMessage], author_id: u64) -> String {
    history
        .iter()
        .filter(|msg| msg.author_id == author_id)
        .map(|msg| msg.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
