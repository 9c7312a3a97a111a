//! # Log Lines
//!
//! Templates for operator-facing log messages.

pub const STARTING: &str = "Starting Geminicord...";
pub const ENV_LOADED: &str = "Loaded environment from .env";

pub fn config_loaded(path: &str, model: &str) -> String {
    format!("Loaded configuration from {path} (model: {model})")
}

pub fn logged_in(tag: &str) -> String {
    format!("🤖 Logged in as {tag}")
}

pub fn commands_registered(count: usize, scope: &str) -> String {
    format!("✅ Registered {count} slash commands ({scope})")
}

pub fn command_registration_failed(err: &str) -> String {
    format!("❌ Failed to register commands: {err}")
}

pub fn dispatching(command: &str, user: &str, guild: Option<u64>, channel: u64) -> String {
    match guild {
        Some(guild) => {
            format!("Dispatching /{command} from {user} in guild {guild} (channel {channel})")
        }
        None => {
            format!("Dispatching /{command} from {user} in direct messages (channel {channel})")
        }
    }
}

pub fn ignored_command(command: &str) -> String {
    format!("Ignoring unknown command /{command}")
}

pub fn command_failed(command: &str, err: &str) -> String {
    format!("/{command} failed: {err}")
}

pub fn no_reply_sent(command: &str) -> String {
    format!("/{command} finished without replying")
}

pub fn failure_reply_failed(command: &str, err: &str) -> String {
    format!("/{command}: could not deliver failure reply: {err}")
}

pub fn moderation_done(action: &str, tag: &str, guild: u64) -> String {
    format!("Performed {action} on {tag} in guild {guild}")
}

pub fn client_error(err: &str) -> String {
    format!("Discord client stopped: {err}")
}
