//! Gateway event handler: registers commands once connected and feeds
//! slash-command interactions to the router.

use async_trait::async_trait;
use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::infrastructure::discord::interaction::DiscordInteraction;
use crate::infrastructure::discord::registrar;
use crate::strings::logs;

pub struct Handler {
    router: Arc<CommandRouter>,
    guild_id: Option<GuildId>,
}

impl Handler {
    pub fn new(router: Arc<CommandRouter>, guild_id: Option<GuildId>) -> Self {
        Self { router, guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{}", logs::logged_in(&ready.user.tag()));

        registrar::report_registration(
            registrar::register_commands(&ctx.http, self.guild_id),
            &registrar::scope(self.guild_id),
        )
        .await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let discord = DiscordInteraction::new(ctx.http.clone(), ctx.cache.clone(), command);
        let invocation = discord.invocation();
        self.router.dispatch(&invocation, &discord, &discord).await;
    }
}
