//! Member domain models and parameters.
//!
//! A member is a player's presence on one server and carries that player's
//! progress there.

use crate::{
    error::AppError,
    leveling::{ExperienceGain, Progress},
    util::parse::parse_u64_from_string,
};

/// Progress of a player on a server.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Database ID of the member row
    pub id: i32,
    /// Discord ID of the player
    pub player_id: u64,
    /// Discord ID of the server
    pub server_id: u64,
    /// Current level and experience towards the next level.
    pub progress: Progress,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored player or server ID is not numeric
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player_id: parse_u64_from_string(entity.player_id)?,
            server_id: parse_u64_from_string(entity.server_id)?,
            progress: Progress::new(entity.level, entity.exp),
        })
    }
}

/// Member together with the player's display name, used for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMember {
    pub member: Member,
    pub name: String,
}

/// Parameters for granting experience to a member for some activity.
///
/// Server and player are upserted as part of the grant so names stay current.
#[derive(Debug, Clone)]
pub struct GrantExperienceParam {
    /// Discord ID of the guild the activity happened in
    pub server_id: u64,
    /// Current guild name
    pub server_name: String,
    /// Discord ID of the acting user
    pub player_id: u64,
    /// Current username
    pub player_name: String,
    /// Experience to grant, must not be negative
    pub amount: i64,
}

/// Outcome of an experience grant.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceOutcome {
    /// Member after the grant was applied.
    pub member: Member,
    /// Progress before and after the grant.
    pub gain: ExperienceGain,
    /// Channel to announce level-ups in, if the server configured one.
    pub levels_channel_id: Option<u64>,
    /// Title of the level reached, if that level has one.
    pub level_title: Option<String>,
}

/// A member's standing on a server, as shown by the rank command.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStanding {
    pub member: Member,
    /// Experience needed to complete the current level.
    pub next_threshold: i64,
    /// 1-based position on the server leaderboard.
    pub rank: u64,
}

impl MemberStanding {
    /// Share of the current level completed, in percent.
    pub fn percent(&self) -> f64 {
        if self.next_threshold <= 0 {
            return 0.0;
        }
        self.member.progress.experience as f64 / self.next_threshold as f64 * 100.0
    }
}
