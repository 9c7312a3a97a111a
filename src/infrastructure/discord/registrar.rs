//! Publishes the command catalog to Discord.

use serenity::all::{
    Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId, Http, Permissions,
};

use std::future::Future;

use crate::application::catalog::{self, CommandDefinition, OptionKind};
use crate::strings::logs;

fn create_command(definition: &CommandDefinition) -> CreateCommand {
    let mut command = CreateCommand::new(definition.name).description(definition.description);

    for option in &definition.options {
        let kind = match option.kind {
            OptionKind::String => CommandOptionType::String,
            OptionKind::User => CommandOptionType::User,
        };
        command = command.add_option(
            CreateCommandOption::new(kind, option.name, option.description)
                .required(option.required),
        );
    }

    if let Some(bits) = definition.permission_bits() {
        command = command.default_member_permissions(Permissions::from_bits_truncate(bits));
    }

    command
}

/// Replaces the registered command set with the catalog, on one guild or globally.
/// Returns the number of commands Discord accepted.
pub async fn register_commands(http: &Http, guild_id: Option<GuildId>) -> serenity::Result<usize> {
    let commands: Vec<CreateCommand> = catalog::catalog().iter().map(create_command).collect();

    let registered = match guild_id {
        Some(guild_id) => guild_id.set_commands(http, commands).await?,
        None => Command::set_global_commands(http, commands).await?,
    };
    Ok(registered.len())
}

/// Awaits a registration attempt and logs its outcome. A failure is not fatal:
/// the previously published command set stays in place.
pub async fn report_registration<F>(registration: F, scope: &str) -> Option<usize>
where
    F: Future<Output = serenity::Result<usize>>,
{
    match registration.await {
        Ok(count) => {
            tracing::info!("{}", logs::commands_registered(count, scope));
            Some(count)
        }
        Err(e) => {
            tracing::error!("{}", logs::command_registration_failed(&e.to_string()));
            None
        }
    }
}

pub fn scope(guild_id: Option<GuildId>) -> String {
    match guild_id {
        Some(id) => format!("guild {id}"),
        None => "global".to_string(),
    }
}
