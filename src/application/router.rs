//! # Command Router
//!
//! Routes incoming slash-command invocations to the appropriate handler (in `interface/commands`).
//! It resolves the command name against the catalog, dispatches with the necessary context and
//! turns handler failures into the command's fixed error reply.

use std::sync::Arc;

use crate::application::catalog::CommandKind;
use crate::application::reply::{ReplyHandle, ReplyState};
use crate::domain::traits::{GuildProvider, LlmProvider, ReplyChannel};
use crate::domain::types::{Invocation, ModerationAction};
use crate::interface::commands;
use crate::strings::logs;

/// Result of routing one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Not a catalog command; nothing was sent.
    Ignored,
    Handled(CommandKind),
    /// The handler failed and the user got the fixed failure message (if deliverable).
    Failed(CommandKind),
}

pub struct CommandRouter {
    llm: Arc<dyn LlmProvider>,
}

impl CommandRouter {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    pub async fn dispatch<R, G>(&self, invocation: &Invocation, channel: &R, guild: &G) -> Dispatch
    where
        R: ReplyChannel + ?Sized,
        G: GuildProvider + ?Sized,
    {
        let Some(kind) = CommandKind::from_name(&invocation.command) else {
            tracing::debug!("{}", logs::ignored_command(&invocation.command));
            return Dispatch::Ignored;
        };

        tracing::info!(
            "{}",
            logs::dispatching(
                kind.name(),
                &invocation.user.tag,
                invocation.guild_id,
                invocation.channel_id
            )
        );

        let mut reply = ReplyHandle::new(channel);
        let llm = self.llm.as_ref();

        let result = match kind {
            CommandKind::Ask => commands::ask::handle_ask(llm, invocation, &mut reply).await,
            CommandKind::Analyze => {
                commands::analyze::handle_analyze(llm, guild, invocation, &mut reply).await
            }
            CommandKind::Kick => {
                commands::moderation::handle_moderation(
                    ModerationAction::Kick,
                    guild,
                    invocation,
                    &mut reply,
                )
                .await
            }
            CommandKind::Ban => {
                commands::moderation::handle_moderation(
                    ModerationAction::Ban,
                    guild,
                    invocation,
                    &mut reply,
                )
                .await
            }
            CommandKind::Roll => commands::fun::handle_roll(&mut reply).await,
            CommandKind::Coinflip => commands::fun::handle_coinflip(&mut reply).await,
            CommandKind::Userinfo => {
                commands::userinfo::handle_userinfo(guild, invocation, &mut reply).await
            }
        };

        match result {
            Ok(()) => {
                if reply.state() != ReplyState::Replied {
                    tracing::warn!("{}", logs::no_reply_sent(kind.name()));
                }
                Dispatch::Handled(kind)
            }
            Err(err) => {
                tracing::error!("{}", logs::command_failed(kind.name(), &err.to_string()));
                if let Err(reply_err) = reply.fail(err.user_message(kind)).await {
                    tracing::error!(
                        "{}",
                        logs::failure_reply_failed(kind.name(), &reply_err.to_string())
                    );
                }
                Dispatch::Failed(kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        ChannelCall, FakeGuild, FakeLlm, RecordingChannel, invocation, user, with_option,
    };
    use crate::domain::types::{OptionValue, Reply};
    use crate::strings::messages;

    fn router(llm: FakeLlm) -> (CommandRouter, Arc<FakeLlm>) {
        let llm = Arc::new(llm);
        (CommandRouter::new(llm.clone()), llm)
    }

    #[tokio::test]
    async fn test_unknown_command_is_ignored() {
        let (router, llm) = router(FakeLlm::answering("unused"));
        let channel = RecordingChannel::default();
        let guild = FakeGuild::default();

        for name in ["ping", "help", "Ask", ""] {
            let outcome = router.dispatch(&invocation(name), &channel, &guild).await;
            assert_eq!(outcome, Dispatch::Ignored);
        }

        assert!(channel.calls().is_empty());
        assert!(llm.prompts().is_empty());
        assert!(guild.actions().is_empty());
    }

    #[tokio::test]
    async fn test_ask_failure_sends_one_fixed_reply() {
        let (router, _) = router(FakeLlm::failing());
        let channel = RecordingChannel::default();
        let inv = with_option(
            invocation("ask"),
            "question",
            OptionValue::String("why?".to_string()),
        );

        let outcome = router.dispatch(&inv, &channel, &FakeGuild::default()).await;

        assert_eq!(outcome, Dispatch::Failed(CommandKind::Ask));
        assert_eq!(
            channel.calls(),
            vec![
                ChannelCall::Defer,
                ChannelCall::Edit(messages::ASK_FAILED.to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_analyze_failure_sends_one_fixed_reply() {
        let (router, _) = router(FakeLlm::failing());
        let channel = RecordingChannel::default();
        let guild = FakeGuild::default().with_message(5, "hello");
        let inv = with_option(
            invocation("analyze"),
            "target",
            OptionValue::User(user(5, "alice")),
        );

        let outcome = router.dispatch(&inv, &channel, &guild).await;

        assert_eq!(outcome, Dispatch::Failed(CommandKind::Analyze));
        assert_eq!(
            channel.calls(),
            vec![
                ChannelCall::Defer,
                ChannelCall::Edit(messages::ANALYZE_FAILED.to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_ask_success() {
        let (router, llm) = router(FakeLlm::answering("Because."));
        let channel = RecordingChannel::default();
        let inv = with_option(
            invocation("ask"),
            "question",
            OptionValue::String("why?".to_string()),
        );

        let outcome = router.dispatch(&inv, &channel, &FakeGuild::default()).await;

        assert_eq!(outcome, Dispatch::Handled(CommandKind::Ask));
        assert_eq!(llm.prompts(), vec!["why?".to_string()]);
        assert_eq!(channel.calls()[1], ChannelCall::Edit("Because.".to_string()));
    }

    #[tokio::test]
    async fn test_kick_unknown_member_replies_ephemerally() {
        let (router, _) = router(FakeLlm::answering("unused"));
        let channel = RecordingChannel::default();
        let guild = FakeGuild::default();
        let inv = with_option(invocation("kick"), "target", OptionValue::User(user(7, "bob")));

        let outcome = router.dispatch(&inv, &channel, &guild).await;

        assert_eq!(outcome, Dispatch::Failed(CommandKind::Kick));
        assert!(guild.actions().is_empty());
        assert_eq!(
            channel.calls(),
            vec![ChannelCall::Respond(Reply::ephemeral(messages::MEMBER_NOT_FOUND))]
        );
    }

    #[tokio::test]
    async fn test_ban_action_failure_uses_fixed_message() {
        let (router, _) = router(FakeLlm::answering("unused"));
        let channel = RecordingChannel::default();
        let mut guild = FakeGuild::default().with_moderatable(user(7, "bob"));
        guild.fail_moderation = true;
        let inv = with_option(invocation("ban"), "target", OptionValue::User(user(7, "bob")));

        let outcome = router.dispatch(&inv, &channel, &guild).await;

        assert_eq!(outcome, Dispatch::Failed(CommandKind::Ban));
        assert_eq!(
            channel.calls(),
            vec![ChannelCall::Respond(Reply::ephemeral(messages::BAN_FAILED))]
        );
    }

    #[tokio::test]
    async fn test_ban_success_calls_action_once() {
        let (router, _) = router(FakeLlm::answering("unused"));
        let channel = RecordingChannel::default();
        let guild = FakeGuild::default().with_moderatable(user(7, "bob"));
        let inv = with_option(invocation("ban"), "target", OptionValue::User(user(7, "bob")));

        let outcome = router.dispatch(&inv, &channel, &guild).await;

        assert_eq!(outcome, Dispatch::Handled(CommandKind::Ban));
        assert_eq!(guild.actions(), vec![(ModerationAction::Ban, 7)]);
        assert_eq!(
            channel.calls(),
            vec![ChannelCall::Respond(Reply::text(messages::banned("bob")))]
        );
    }

    #[tokio::test]
    async fn test_lost_confirmation_after_ban_is_generic() {
        let (router, _) = router(FakeLlm::answering("unused"));
        let channel = RecordingChannel::failing_times(1);
        let guild = FakeGuild::default().with_moderatable(user(7, "bob"));
        let inv = with_option(invocation("ban"), "target", OptionValue::User(user(7, "bob")));

        let outcome = router.dispatch(&inv, &channel, &guild).await;

        assert_eq!(outcome, Dispatch::Failed(CommandKind::Ban));
        assert_eq!(guild.actions(), vec![(ModerationAction::Ban, 7)]);
        assert_eq!(
            channel.calls(),
            vec![ChannelCall::Respond(Reply::ephemeral(messages::GENERIC_FAILED))]
        );
    }

    #[tokio::test]
    async fn test_every_catalog_command_is_routed() {
        let (router, _) = router(FakeLlm::answering("ok"));
        let guild = FakeGuild::default()
            .with_moderatable(user(1, "invoker"))
            .with_moderatable(user(7, "bob"))
            .with_message(7, "hi");

        for kind in CommandKind::ALL {
            let inv = with_option(
                with_option(
                    invocation(kind.name()),
                    "question",
                    OptionValue::String("q".to_string()),
                ),
                "target",
                OptionValue::User(user(7, "bob")),
            );
            let channel = RecordingChannel::default();
            let outcome = router.dispatch(&inv, &channel, &guild).await;
            assert_eq!(outcome, Dispatch::Handled(kind));
            assert!(!channel.calls().is_empty(), "{} sent nothing", kind.name());
        }
    }

    #[tokio::test]
    async fn test_undeliverable_failure_does_not_panic() {
        let (router, _) = router(FakeLlm::failing());
        let channel = RecordingChannel::failing();
        let inv = with_option(
            invocation("ask"),
            "question",
            OptionValue::String("why?".to_string()),
        );

        let outcome = router.dispatch(&inv, &channel, &FakeGuild::default()).await;
        assert_eq!(outcome, Dispatch::Failed(CommandKind::Ask));
    }
}
