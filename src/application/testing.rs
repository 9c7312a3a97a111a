//! In-memory fakes of the domain traits for handler and router tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::traits::{GuildProvider, LlmProvider, ReplyChannel};
use crate::domain::types::{
    ChannelMessage, GuildMember, Invocation, ModerationAction, ModerationRights, OptionValue, Reply,
    UserProfile,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelCall {
    Defer,
    Edit(String),
    Respond(Reply),
}

#[derive(Default)]
pub struct RecordingChannel {
    calls: Mutex<Vec<ChannelCall>>,
    failures_left: Mutex<usize>,
}

impl RecordingChannel {
    pub fn failing() -> Self {
        Self::failing_times(usize::MAX)
    }

    /// Rejects the first `times` calls, then records normally.
    pub fn failing_times(times: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures_left: Mutex::new(times),
        }
    }

    pub fn calls(&self) -> Vec<ChannelCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ChannelCall) -> Result<(), String> {
        let mut failures_left = self.failures_left.lock().unwrap();
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err("connection reset".to_string());
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait]
impl ReplyChannel for RecordingChannel {
    async fn defer(&self) -> Result<(), String> {
        self.record(ChannelCall::Defer)
    }

    async fn edit_deferred(&self, content: &str) -> Result<(), String> {
        self.record(ChannelCall::Edit(content.to_string()))
    }

    async fn respond(&self, reply: &Reply) -> Result<(), String> {
        self.record(ChannelCall::Respond(reply.clone()))
    }
}

#[derive(Default)]
pub struct FakeGuild {
    pub messages: Vec<ChannelMessage>,
    pub members: HashMap<u64, GuildMember>,
    pub rights: HashMap<u64, ModerationRights>,
    pub fail_lookups: bool,
    pub fail_moderation: bool,
    pub history_limits: Mutex<Vec<u8>>,
    pub rights_lookups: Mutex<Vec<u64>>,
    pub actions: Mutex<Vec<(ModerationAction, u64)>>,
}

impl FakeGuild {
    pub fn with_member(mut self, member: GuildMember) -> Self {
        self.members.insert(member.user.id, member);
        self
    }

    pub fn with_rights(mut self, user_id: u64, rights: ModerationRights) -> Self {
        self.rights.insert(user_id, rights);
        self
    }

    /// A member the bot may both kick and ban.
    pub fn with_moderatable(self, user: UserProfile) -> Self {
        let id = user.id;
        self.with_member(member(user)).with_rights(
            id,
            ModerationRights {
                kickable: true,
                bannable: true,
            },
        )
    }

    pub fn with_message(mut self, author_id: u64, content: &str) -> Self {
        self.messages.push(ChannelMessage {
            author_id,
            content: content.to_string(),
        });
        self
    }

    pub fn actions(&self) -> Vec<(ModerationAction, u64)> {
        self.actions.lock().unwrap().clone()
    }

    pub fn rights_lookups(&self) -> Vec<u64> {
        self.rights_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuildProvider for FakeGuild {
    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, String> {
        if self.fail_lookups {
            return Err("missing access".to_string());
        }
        self.history_limits.lock().unwrap().push(limit);
        Ok(self.messages.iter().take(limit as usize).cloned().collect())
    }

    async fn member(&self, user_id: u64) -> Result<Option<GuildMember>, String> {
        if self.fail_lookups {
            return Err("missing access".to_string());
        }
        Ok(self.members.get(&user_id).cloned())
    }

    async fn moderation_rights(&self, user_id: u64) -> Result<ModerationRights, String> {
        if self.fail_lookups {
            return Err("missing access".to_string());
        }
        self.rights_lookups.lock().unwrap().push(user_id);
        Ok(self.rights.get(&user_id).copied().unwrap_or_default())
    }

    async fn moderate(&self, action: ModerationAction, user_id: u64) -> Result<(), String> {
        if self.fail_moderation {
            return Err("missing permissions".to_string());
        }
        self.actions.lock().unwrap().push((action, user_id));
        Ok(())
    }
}

pub struct FakeLlm {
    response: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn answering(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err("quota exceeded".to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone()
    }
}

pub fn user(id: u64, name: &str) -> UserProfile {
    UserProfile {
        id,
        name: name.to_string(),
        tag: name.to_string(),
        avatar_url: format!("https://cdn.discordapp.com/avatars/{id}/a.png"),
        created_at: Utc.with_ymd_and_hms(2020, 3, 14, 15, 9, 26).unwrap(),
    }
}

pub fn member(user: UserProfile) -> GuildMember {
    GuildMember {
        user,
        joined_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 23, 59, 0).unwrap()),
    }
}

pub fn invocation(command: &str) -> Invocation {
    Invocation {
        command: command.to_string(),
        options: HashMap::new(),
        user: user(1, "invoker"),
        channel_id: 10,
        guild_id: Some(100),
    }
}

pub fn with_option(mut invocation: Invocation, name: &str, value: OptionValue) -> Invocation {
    invocation.options.insert(name.to_string(), value);
    invocation
}
