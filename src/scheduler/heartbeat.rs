use serenity::cache::Cache;

use crate::{
    error::AppError, model::server::UpsertServerParam, service::ServerService, state::AppState,
};

/// Refreshes every cached guild so `last_seen_at` tracks guilds the bot is still in.
pub async fn run(state: &AppState, cache: &Cache) -> Result<(), AppError> {
    let guilds: Vec<UpsertServerParam> = cache
        .guilds()
        .into_iter()
        .filter_map(|guild_id| {
            cache.guild(guild_id).map(|guild| UpsertServerParam {
                discord_id: guild_id.get(),
                name: guild.name.clone(),
            })
        })
        .collect();

    let refreshed = ServerService::new(&state.db).heartbeat(guilds).await?;

    tracing::info!("Heartbeat: {} servers seen", refreshed);

    Ok(())
}
