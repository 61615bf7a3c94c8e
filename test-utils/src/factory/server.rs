//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db)
///     .name("Hellshade")
///     .levels_channel_id(Some("367057131750293514"))
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    server_exp: i64,
    levels_channel_id: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric id
    /// - name: `"Server {id}"`
    /// - server_exp: `0`
    /// - levels_channel_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Server {}", id),
            server_exp: 0,
            levels_channel_id: None,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn server_exp(mut self, server_exp: i64) -> Self {
        self.server_exp = server_exp;
        self
    }

    pub fn levels_channel_id(mut self, channel_id: Option<impl Into<String>>) -> Self {
        self.levels_channel_id = channel_id.map(Into::into);
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            server_exp: ActiveValue::Set(self.server_exp),
            levels_channel_id: ActiveValue::Set(self.levels_channel_id),
            last_seen_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
