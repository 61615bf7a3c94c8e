//! Player domain models and parameters.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A Discord user known to the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Username as last seen.
    pub name: String,
    /// Whether the player is left out of public listings.
    pub hidden: bool,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored Discord ID is not numeric
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            hidden: entity.hidden,
        })
    }
}

/// Parameters for upserting a player whenever they show activity.
///
/// Existing players only get their name refreshed; visibility is kept.
#[derive(Debug, Clone)]
pub struct UpsertPlayerParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Current username.
    pub name: String,
}
