//! Server domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A Discord guild the bot tracks experience in.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    /// Discord ID of the guild
    pub discord_id: u64,
    /// Guild name as last seen.
    pub name: String,
    /// Total experience granted on this server.
    pub server_exp: i64,
    /// Channel for level-up announcements, if configured.
    pub levels_channel_id: Option<u64>,
    /// Last time the bot confirmed it is still in the guild.
    pub last_seen_at: DateTime<Utc>,
}

impl Server {
    /// Converts an entity model to a server domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Server)` - The converted server
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild or channel ID is not numeric
    pub fn from_entity(entity: entity::server::Model) -> Result<Self, AppError> {
        let levels_channel_id = entity
            .levels_channel_id
            .map(parse_u64_from_string)
            .transpose()?;

        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            name: entity.name,
            server_exp: entity.server_exp,
            levels_channel_id,
            last_seen_at: entity.last_seen_at,
        })
    }
}

/// Parameters for upserting a server from a guild event.
#[derive(Debug, Clone)]
pub struct UpsertServerParam {
    /// Discord ID of the guild
    pub discord_id: u64,
    /// Current guild name.
    pub name: String,
}
