//! Member factory for creating test member entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating members of existing players and servers.
///
/// The player and server rows must exist before `build()` is called.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: String,
    server_id: String,
    level: i32,
    exp: i64,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory at level 0 with no experience.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `player_id` - Discord ID of an existing player
    /// - `server_id` - Discord ID of an existing server
    pub fn new(db: &'a DatabaseConnection, player_id: &str, server_id: &str) -> Self {
        Self {
            db,
            player_id: player_id.to_string(),
            server_id: server_id.to_string(),
            level: 0,
            exp: 0,
        }
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn exp(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            server_id: ActiveValue::Set(self.server_id),
            level: ActiveValue::Set(self.level),
            exp: ActiveValue::Set(self.exp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member at level 0 for an existing player and server.
pub async fn create_member(
    db: &DatabaseConnection,
    player_id: &str,
    server_id: &str,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db, player_id, server_id).build().await
}
