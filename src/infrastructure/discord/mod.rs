//! # Discord Infrastructure
//!
//! serenity-backed implementations of the reply and guild seams, plus the
//! gateway client that drives them.

mod handler;
mod hierarchy;
mod interaction;
mod registrar;

use anyhow::{Context, Result};
use serenity::all::{ApplicationId, Client, GatewayIntents, GuildId};
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::DiscordConfig;
use handler::Handler;

/// Connects to the gateway and serves interactions until the client stops.
pub async fn run(config: &DiscordConfig, router: Arc<CommandRouter>) -> Result<()> {
    let token = config.token()?;
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(router, config.guild_id.map(GuildId::new));
    let mut builder = Client::builder(&token, intents).event_handler(handler);
    if let Some(id) = config.application_id()? {
        builder = builder.application_id(ApplicationId::new(id));
    }

    let mut client = builder.await.context("Failed to create Discord client")?;
    client.start().await.context("Failed to log in to Discord")?;
    Ok(())
}
