//! Role-hierarchy checks deciding whether the bot may kick or ban a member.
//!
//! A member is manageable when they are neither the guild owner nor the bot
//! itself, and the bot either owns the guild or holds a strictly higher top
//! role. Kick and ban additionally need the matching permission (or
//! administrator) in the bot's resolved permissions.

use serenity::all::{Permissions, Role, RoleId, UserId};
use std::collections::HashMap;

use crate::domain::types::ModerationRights;

/// A member's identity and the position of their highest role.
#[derive(Debug, Clone, Copy)]
pub struct Standing {
    pub user_id: UserId,
    pub top_role: u16,
}

impl Standing {
    pub fn new(user_id: UserId, roles: &[RoleId], guild_roles: &HashMap<RoleId, Role>) -> Self {
        Self {
            user_id,
            top_role: top_position(roles, guild_roles),
        }
    }
}

/// Highest position among the member's roles; `0` (the @everyone position) when none resolve.
pub fn top_position(member_roles: &[RoleId], guild_roles: &HashMap<RoleId, Role>) -> u16 {
    member_roles
        .iter()
        .filter_map(|id| guild_roles.get(id))
        .map(|role| role.position)
        .max()
        .unwrap_or(0)
}

pub fn moderation_rights(
    target: Standing,
    bot: Standing,
    owner_id: UserId,
    bot_permissions: Permissions,
) -> ModerationRights {
    let manageable = if target.user_id == owner_id || target.user_id == bot.user_id {
        false
    } else if bot.user_id == owner_id {
        true
    } else {
        bot.top_role > target.top_role
    };

    let admin = bot_permissions.contains(Permissions::ADMINISTRATOR);
    ModerationRights {
        kickable: manageable && (admin || bot_permissions.contains(Permissions::KICK_MEMBERS)),
        bannable: manageable && (admin || bot_permissions.contains(Permissions::BAN_MEMBERS)),
    }
}
