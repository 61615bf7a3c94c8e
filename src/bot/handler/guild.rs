use serenity::all::{Context, Guild};

use crate::{model::server::UpsertServerParam, service::ServerService, state::AppState};

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Stores the guild, or refreshes its name if the bot has seen it before. Experience
/// and the levels channel are kept.
pub async fn handle_guild_create(
    state: &AppState,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}, new: {:?}",
        guild.name,
        guild_id,
        guild.member_count,
        is_new
    );

    let service = ServerService::new(&state.db);
    if let Err(e) = service
        .upsert(UpsertServerParam {
            discord_id: guild_id,
            name: guild.name,
        })
        .await
    {
        tracing::error!("Failed to upsert server {}: {:?}", guild_id, e);
    }
}
