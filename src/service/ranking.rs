//! Leaderboards and individual standings.

use sea_orm::DatabaseConnection;

use crate::{
    data::MemberRepository,
    error::AppError,
    model::member::{MemberStanding, RankedMember},
};

/// Members listed when no count is given.
pub const DEFAULT_TOP_LIMIT: u64 = 5;

/// Most members a single leaderboard may list.
pub const MAX_TOP_LIMIT: u64 = 25;

pub struct RankingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the leaderboard of a server.
    ///
    /// # Arguments
    /// - `server_id` - Discord ID of the server
    /// - `limit` - Requested member count, clamped to `1..=MAX_TOP_LIMIT`
    pub async fn top(&self, server_id: u64, limit: u64) -> Result<Vec<RankedMember>, AppError> {
        let limit = limit.clamp(1, MAX_TOP_LIMIT);

        MemberRepository::new(self.db).get_top(server_id, limit).await
    }

    /// Gets a player's progress, next threshold and position on a server.
    ///
    /// # Returns
    /// - `Ok(Some(MemberStanding))` - Player has a member row on the server
    /// - `Ok(None)` - Player never earned experience there
    /// - `Err(AppError)` - Database error or invalid stored progress
    pub async fn standing(
        &self,
        server_id: u64,
        player_id: u64,
    ) -> Result<Option<MemberStanding>, AppError> {
        let repo = MemberRepository::new(self.db);

        let Some(member) = repo.find(player_id, server_id).await? else {
            return Ok(None);
        };

        let next_threshold = member.progress.next_threshold()?;
        let rank = repo.get_rank(server_id, member.progress).await?;

        Ok(Some(MemberStanding {
            member,
            next_threshold,
            rank,
        }))
    }
}
