//! # Reply Handle
//!
//! Tracks the response protocol of a single interaction: either one immediate
//! reply, or one defer followed by exactly one finalize. Violations are
//! rejected locally before they reach the platform.

use thiserror::Error;

use crate::domain::traits::ReplyChannel;
use crate::domain::types::Reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Received,
    Deferred,
    Replied,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplyError {
    #[error("interaction was already acknowledged")]
    AlreadyAcknowledged,
    #[error("cannot finalize a reply that was not deferred")]
    NotDeferred,
    #[error("interaction was already replied to")]
    AlreadyReplied,
    #[error("reply transport failed: {0}")]
    Transport(String),
}

pub struct ReplyHandle<'a, C: ReplyChannel + ?Sized> {
    channel: &'a C,
    state: ReplyState,
}

impl<'a, C: ReplyChannel + ?Sized> ReplyHandle<'a, C> {
    pub fn new(channel: &'a C) -> Self {
        Self {
            channel,
            state: ReplyState::Received,
        }
    }

    pub fn state(&self) -> ReplyState {
        self.state
    }

    pub async fn defer(&mut self) -> Result<(), ReplyError> {
        match self.state {
            ReplyState::Received => {}
            ReplyState::Deferred => return Err(ReplyError::AlreadyAcknowledged),
            ReplyState::Replied => return Err(ReplyError::AlreadyReplied),
        }
        self.channel.defer().await.map_err(ReplyError::Transport)?;
        self.state = ReplyState::Deferred;
        Ok(())
    }

    pub async fn finalize(&mut self, content: &str) -> Result<(), ReplyError> {
        match self.state {
            ReplyState::Deferred => {}
            ReplyState::Received => return Err(ReplyError::NotDeferred),
            ReplyState::Replied => return Err(ReplyError::AlreadyReplied),
        }
        self.channel
            .edit_deferred(content)
            .await
            .map_err(ReplyError::Transport)?;
        self.state = ReplyState::Replied;
        Ok(())
    }

    pub async fn reply(&mut self, reply: Reply) -> Result<(), ReplyError> {
        match self.state {
            ReplyState::Received => {}
            ReplyState::Deferred => return Err(ReplyError::AlreadyAcknowledged),
            ReplyState::Replied => return Err(ReplyError::AlreadyReplied),
        }
        self.channel
            .respond(&reply)
            .await
            .map_err(ReplyError::Transport)?;
        self.state = ReplyState::Replied;
        Ok(())
    }

    /// Sends a failure message through whichever protocol is still open:
    /// finalize when deferred, an ephemeral reply otherwise.
    pub async fn fail(&mut self, message: &str) -> Result<(), ReplyError> {
        match self.state {
            ReplyState::Deferred => self.finalize(message).await,
            ReplyState::Received => self.reply(Reply::ephemeral(message)).await,
            ReplyState::Replied => Err(ReplyError::AlreadyReplied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{ChannelCall, RecordingChannel};

    #[tokio::test]
    async fn test_immediate_reply() {
        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);

        handle.reply(Reply::text("hi")).await.unwrap();
        assert_eq!(handle.state(), ReplyState::Replied);
        assert_eq!(channel.calls(), vec![ChannelCall::Respond(Reply::text("hi"))]);
    }

    #[tokio::test]
    async fn test_reply_twice_is_rejected() {
        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);

        handle.reply(Reply::text("one")).await.unwrap();
        let err = handle.reply(Reply::text("two")).await.unwrap_err();
        assert_eq!(err, ReplyError::AlreadyReplied);
        assert_eq!(channel.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_defer_then_finalize() {
        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);

        handle.defer().await.unwrap();
        assert_eq!(handle.state(), ReplyState::Deferred);
        handle.finalize("done").await.unwrap();
        assert_eq!(handle.state(), ReplyState::Replied);
        assert_eq!(
            channel.calls(),
            vec![ChannelCall::Defer, ChannelCall::Edit("done".to_string())]
        );
    }

    #[tokio::test]
    async fn test_finalize_without_defer_is_rejected() {
        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);

        assert_eq!(handle.finalize("x").await.unwrap_err(), ReplyError::NotDeferred);
        assert!(channel.calls().is_empty());
    }

    #[tokio::test]
    async fn test_defer_twice_is_rejected() {
        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);

        handle.defer().await.unwrap();
        assert_eq!(handle.defer().await.unwrap_err(), ReplyError::AlreadyAcknowledged);
        assert_eq!(
            handle.reply(Reply::text("x")).await.unwrap_err(),
            ReplyError::AlreadyAcknowledged
        );
        assert_eq!(channel.calls(), vec![ChannelCall::Defer]);
    }

    #[tokio::test]
    async fn test_fail_picks_protocol() {
        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);
        handle.fail("nope").await.unwrap();
        assert_eq!(channel.calls(), vec![ChannelCall::Respond(Reply::ephemeral("nope"))]);

        let channel = RecordingChannel::default();
        let mut handle = ReplyHandle::new(&channel);
        handle.defer().await.unwrap();
        handle.fail("nope").await.unwrap();
        assert_eq!(
            channel.calls(),
            vec![ChannelCall::Defer, ChannelCall::Edit("nope".to_string())]
        );
        assert_eq!(handle.fail("again").await.unwrap_err(), ReplyError::AlreadyReplied);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_state() {
        let channel = RecordingChannel::failing();
        let mut handle = ReplyHandle::new(&channel);

        let err = handle.defer().await.unwrap_err();
        assert!(matches!(err, ReplyError::Transport(_)));
        assert_eq!(handle.state(), ReplyState::Received);
    }
}
