//! # Fun Commands
//!
//! Handles `/roll` and `/coinflip`. Fully local, no outbound calls besides the reply.

use rand::Rng;

use crate::application::error::CommandError;
use crate::application::reply::ReplyHandle;
use crate::domain::traits::ReplyChannel;
use crate::domain::types::Reply;
use crate::strings::messages;

pub const DIE_SIDES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn as_str(&self) -> &str {
        match self {
            CoinSide::Heads => "Heads",
            CoinSide::Tails => "Tails",
        }
    }
}

/// Uniform integer in `1..=100`.
pub fn roll_die(rng: &mut impl Rng) -> u32 {
    rng.random_range(1..=DIE_SIDES)
}

pub fn flip_coin(rng: &mut impl Rng) -> CoinSide {
    if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

pub async fn handle_roll<R: ReplyChannel + ?Sized>(
    reply: &mut ReplyHandle<'_, R>,
) -> Result<(), CommandError> {
    // Thread-local RNG is not Send; draw before the await point.
    let value = roll_die(&mut rand::rng());
    reply.reply(Reply::text(messages::rolled(value))).await?;
    Ok(())
}

pub async fn handle_coinflip<R: ReplyChannel + ?Sized>(
    reply: &mut ReplyHandle<'_, R>,
) -> Result<(), CommandError> {
    let side = flip_coin(&mut rand::rng());
    reply.reply(Reply::text(messages::coin(side.as_str()))).await?;
    Ok(())
}
