//! # Command Catalog
//!
//! The static set of slash commands the bot exposes. Built once at startup,
//! pushed to the platform by the registrar and used by the router to resolve
//! incoming command names.

use crate::strings::messages;

/// Identifier of every command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Ask,
    Analyze,
    Kick,
    Ban,
    Roll,
    Coinflip,
    Userinfo,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::Ask,
        CommandKind::Analyze,
        CommandKind::Kick,
        CommandKind::Ban,
        CommandKind::Roll,
        CommandKind::Coinflip,
        CommandKind::Userinfo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Ask => "ask",
            CommandKind::Analyze => "analyze",
            CommandKind::Kick => "kick",
            CommandKind::Ban => "ban",
            CommandKind::Roll => "roll",
            CommandKind::Coinflip => "coinflip",
            CommandKind::Userinfo => "userinfo",
        }
    }

    /// Resolves a registered command name. Names are matched exactly since
    /// the platform only delivers names it accepted at registration.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Fixed user-facing message sent when the handler fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CommandKind::Ask => messages::ASK_FAILED,
            CommandKind::Analyze => messages::ANALYZE_FAILED,
            CommandKind::Kick => messages::KICK_FAILED,
            CommandKind::Ban => messages::BAN_FAILED,
            CommandKind::Userinfo => messages::USERINFO_FAILED,
            CommandKind::Roll | CommandKind::Coinflip => messages::GENERIC_FAILED,
        }
    }

    pub fn definition(&self) -> CommandDefinition {
        match self {
            CommandKind::Ask => CommandDefinition::new("ask", "Ask Gemini AI a question")
                .option(OptionDefinition::string("question", "Your question").required()),
            CommandKind::Analyze => {
                CommandDefinition::new("analyze", "Analyze a user’s recent chat behavior")
                    .option(OptionDefinition::user("target", "User to analyze").required())
            }
            CommandKind::Kick => CommandDefinition::new("kick", "Kick a user from the server")
                .option(OptionDefinition::user("target", "User to kick").required())
                .permission(Permission::KickMembers),
            CommandKind::Ban => CommandDefinition::new("ban", "Ban a user from the server")
                .option(OptionDefinition::user("target", "User to ban").required())
                .permission(Permission::BanMembers),
            CommandKind::Roll => CommandDefinition::new("roll", "Roll a dice (1–100)"),
            CommandKind::Coinflip => CommandDefinition::new("coinflip", "Flip a coin"),
            CommandKind::Userinfo => CommandDefinition::new("userinfo", "View user details")
                .option(OptionDefinition::user("target", "User to view")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

impl OptionDefinition {
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::String,
            required: false,
        }
    }

    pub fn user(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: OptionKind::User,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Member permissions a command can be gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    KickMembers,
    BanMembers,
}

impl Permission {
    /// Discord permission bit
    pub fn bits(&self) -> u64 {
        match self {
            Permission::KickMembers => 1 << 1,
            Permission::BanMembers => 1 << 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionDefinition>,
    pub permissions: Vec<Permission>,
}

impl CommandDefinition {
    fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            options: Vec::new(),
            permissions: Vec::new(),
        }
    }

    fn option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    fn permission(mut self, permission: Permission) -> Self {
        self.permissions.push(permission);
        self
    }

    /// Default member permission bits, `None` when the command is open to everyone.
    pub fn permission_bits(&self) -> Option<u64> {
        if self.permissions.is_empty() {
            return None;
        }
        Some(self.permissions.iter().fold(0, |bits, p| bits | p.bits()))
    }
}

/// The full command catalog, in registration order.
pub fn catalog() -> Vec<CommandDefinition> {
    CommandKind::ALL.iter().map(|kind| kind.definition()).collect()
}
