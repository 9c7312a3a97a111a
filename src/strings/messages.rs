//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes command replies, refusals and the fixed failure messages.

pub const ASK_FAILED: &str = "❌ AI failed to respond.";
pub const ANALYZE_FAILED: &str = "❌ Analysis failed.";
pub const KICK_FAILED: &str = "❌ Failed to kick this user.";
pub const BAN_FAILED: &str = "❌ Failed to ban this user.";
pub const USERINFO_FAILED: &str = "❌ Could not load user details.";
pub const GENERIC_FAILED: &str = "❌ Something went wrong.";

pub const GUILD_ONLY: &str = "This command can only be used inside a server.";
pub const MEMBER_NOT_FOUND: &str = "That user is not a member of this server.";
pub const NO_RECENT_MESSAGES: &str = "No recent messages found.";

pub const KICK_REFUSED: &str = "I can’t kick this user.";
pub const BAN_REFUSED: &str = "I can’t ban this user.";

pub const ACCOUNT_CREATED_FIELD: &str = "Discord Account Created";
pub const JOINED_SERVER_FIELD: &str = "Joined This Server";
pub const UNKNOWN_DATE: &str = "Unknown";
pub const USERINFO_COLOR: u32 = 0x0099FF;

pub fn analysis_result(username: &str, analysis: &str) -> String {
    format!("🧠 **Analysis of {username}:**\n{analysis}")
}

pub fn kicked(tag: &str) -> String {
    format!("👢 **{tag}** has been kicked.")
}

pub fn banned(tag: &str) -> String {
    format!("🔨 **{tag}** has been banned.")
}

pub fn rolled(value: u32) -> String {
    format!("🎲 You rolled **{value}**")
}

pub fn coin(side: &str) -> String {
    format!("🪙 It’s **{side}**")
}
