use sea_orm::DatabaseConnection;

use crate::{
    data::ServerRepository,
    error::AppError,
    model::server::{Server, UpsertServerParam},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a guild or refreshes its name and `last_seen_at`.
    pub async fn upsert(&self, param: UpsertServerParam) -> Result<Server, AppError> {
        ServerRepository::new(self.db).upsert(param).await
    }

    /// Sets or clears the channel level-ups and weekly leaderboards are posted to.
    ///
    /// The server is created first if the bot has not stored it yet.
    ///
    /// # Returns
    /// - `Ok(Server)` - Server with the new channel
    /// - `Err(AppError::DbErr)` - Database error during upsert or update
    pub async fn set_levels_channel(
        &self,
        server: UpsertServerParam,
        channel_id: Option<u64>,
    ) -> Result<Server, AppError> {
        let repo = ServerRepository::new(self.db);
        let discord_id = server.discord_id;

        repo.upsert(server).await?;
        repo.set_levels_channel(discord_id, channel_id).await?;

        repo.find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} not found", discord_id)))
    }

    /// Gets every server with a levels channel configured.
    pub async fn get_with_levels_channel(&self) -> Result<Vec<Server>, AppError> {
        let servers = ServerRepository::new(self.db).get_all().await?;

        Ok(servers
            .into_iter()
            .filter(|server| server.levels_channel_id.is_some())
            .collect())
    }

    /// Refreshes name and `last_seen_at` of every guild the bot is currently in.
    ///
    /// Failures for a single guild are logged and skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of guilds refreshed
    pub async fn heartbeat(&self, guilds: Vec<UpsertServerParam>) -> Result<usize, AppError> {
        let repo = ServerRepository::new(self.db);
        let mut refreshed = 0;

        for guild in guilds {
            let discord_id = guild.discord_id;
            match repo.upsert(guild).await {
                Ok(_) => refreshed += 1,
                Err(e) => tracing::warn!("Failed to refresh server {}: {}", discord_id, e),
            }
        }

        tracing::debug!("Heartbeat refreshed {} servers", refreshed);

        Ok(refreshed)
    }
}
