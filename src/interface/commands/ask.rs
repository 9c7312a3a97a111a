//! # Ask Command
//!
//! Handles `/ask`: forwards the question verbatim to the LLM and posts the answer.

use crate::application::error::CommandError;
use crate::application::reply::ReplyHandle;
use crate::application::utils::truncate_chars;
use crate::domain::traits::{LlmProvider, ReplyChannel};
use crate::domain::types::Invocation;

/// Answers longer than this are cut to stay under Discord's 2000 character ceiling.
pub const MAX_ANSWER_CHARS: usize = 1900;

pub async fn handle_ask<R: ReplyChannel + ?Sized>(
    llm: &dyn LlmProvider,
    invocation: &Invocation,
    reply: &mut ReplyHandle<'_, R>,
) -> Result<(), CommandError> {
    reply.defer().await?;

    let question = invocation
        .string_option("question")
        .ok_or(CommandError::MissingOption("question"))?;

    let answer = llm.generate(question).await.map_err(CommandError::Ai)?;

    reply
        .finalize(&truncate_chars(&answer, MAX_ANSWER_CHARS))
        .await?;
    Ok(())
}
