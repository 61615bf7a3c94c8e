use sea_orm::DatabaseConnection;

use crate::{
    data::PlayerRepository,
    error::AppError,
    model::player::{Player, UpsertPlayerParam},
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes a player visible in public listings, creating the player if needed.
    ///
    /// # Returns
    /// - `Ok(Player)` - The registered player
    /// - `Err(AppError::DbErr)` - Database error during upsert or update
    pub async fn register(&self, param: UpsertPlayerParam) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);
        let discord_id = param.discord_id;

        repo.upsert(param).await?;
        repo.set_hidden(discord_id, false).await?;

        repo.find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", discord_id)))
    }
}
