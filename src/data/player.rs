//! Player data repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::player::{Player, UpsertPlayerParam},
};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a player from parameter model.
    ///
    /// Inserts a new, hidden player or refreshes the name of an existing one. The
    /// hidden flag of existing players is left untouched.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created or updated player
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertPlayerParam) -> Result<Player, AppError> {
        let entity = entity::prelude::Player::insert(entity::player::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            hidden: ActiveValue::Set(true),
        })
        .on_conflict(
            OnConflict::column(entity::player::Column::DiscordId)
                .update_column(entity::player::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Finds a player by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found
    /// - `Ok(None)` - No player with that Discord ID
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<Player>, AppError> {
        let entity = entity::prelude::Player::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Player::from_entity).transpose()
    }

    /// Sets whether a player is hidden from public listings.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated (or no matching player found)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_hidden(&self, discord_id: u64, hidden: bool) -> Result<(), AppError> {
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::DiscordId.eq(discord_id.to_string()))
            .col_expr(
                entity::player::Column::Hidden,
                sea_orm::sea_query::Expr::value(hidden),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
