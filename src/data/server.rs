//! Server data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{
    error::AppError,
    model::server::{Server, UpsertServerParam},
};

/// Repository providing database operations for servers.
pub struct ServerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a server from parameter model.
    ///
    /// Inserts a new server with no experience and no levels channel, or refreshes
    /// the name of an existing one. Either way `last_seen_at` is set to now.
    ///
    /// # Returns
    /// - `Ok(Server)` - The created or updated server
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<Server, AppError> {
        let entity = entity::prelude::Server::insert(entity::server::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            server_exp: ActiveValue::Set(0),
            levels_channel_id: ActiveValue::Set(None),
            last_seen_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::server::Column::DiscordId)
                .update_columns([
                    entity::server::Column::Name,
                    entity::server::Column::LastSeenAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Server::from_entity(entity)
    }

    /// Finds a server by its Discord guild ID.
    ///
    /// # Returns
    /// - `Ok(Some(Server))` - Server found
    /// - `Ok(None)` - Bot has never seen this guild
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find_by_discord_id(&self, discord_id: u64) -> Result<Option<Server>, AppError> {
        let entity = entity::prelude::Server::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Server::from_entity).transpose()
    }

    /// Gets all servers the bot has seen.
    pub async fn get_all(&self) -> Result<Vec<Server>, AppError> {
        entity::prelude::Server::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(Server::from_entity)
            .collect()
    }

    /// Sets or clears the channel receiving level-up announcements.
    ///
    /// # Returns
    /// - `Ok(())` - Channel updated (or no matching server found)
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_levels_channel(
        &self,
        discord_id: u64,
        channel_id: Option<u64>,
    ) -> Result<(), AppError> {
        entity::prelude::Server::update_many()
            .filter(entity::server::Column::DiscordId.eq(discord_id.to_string()))
            .col_expr(
                entity::server::Column::LevelsChannelId,
                sea_orm::sea_query::Expr::value(channel_id.map(|id| id.to_string())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adds granted experience to the server total.
    ///
    /// # Returns
    /// - `Ok(Server)` - Server with the updated total
    /// - `Err(AppError::NotFound)` - No server with that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn add_experience(&self, discord_id: u64, amount: i64) -> Result<Server, AppError> {
        let Some(existing) = entity::prelude::Server::find_by_id(discord_id.to_string())
            .one(self.db)
            .await?
        else {
            return Err(AppError::NotFound(format!("Server {} not found", discord_id)));
        };

        let total = existing.server_exp.saturating_add(amount);
        let mut active: entity::server::ActiveModel = existing.into();
        active.server_exp = ActiveValue::Set(total);

        let entity = active.update(self.db).await?;

        Server::from_entity(entity)
    }
}
