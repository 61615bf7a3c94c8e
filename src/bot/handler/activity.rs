//! Experience grants for activity seen through gateway events.

use serenity::all::{ChannelId, Context, GuildId, User};

use crate::{
    bot::reply::{self, Activity},
    model::member::{ExperienceOutcome, GrantExperienceParam},
    service::ExperienceService,
    state::AppState,
};

/// Guild name from the cache, or a placeholder while the guild is not cached yet.
pub fn guild_name(ctx: &Context, guild_id: GuildId) -> String {
    ctx.cache
        .guild(guild_id)
        .map(|guild| guild.name.clone())
        .unwrap_or_else(|| format!("Server {}", guild_id))
}

/// Grants experience for an activity and announces any level-up.
///
/// Errors are logged; the event that caused the grant is never affected.
pub async fn reward_activity(
    state: &AppState,
    ctx: &Context,
    guild_id: GuildId,
    user: &User,
    amount: i64,
    activity: Activity,
) {
    let service = ExperienceService::new(&state.db, &state.experience_lock);
    let result = service
        .grant(GrantExperienceParam {
            server_id: guild_id.get(),
            server_name: guild_name(ctx, guild_id),
            player_id: user.id.get(),
            player_name: user.name.clone(),
            amount,
        })
        .await;

    match result {
        Ok(outcome) => announce_level_up(ctx, &outcome, &user.name, activity).await,
        Err(e) => tracing::error!(
            "Failed to grant {} experience to {} on server {}: {:?}",
            amount,
            user.id,
            guild_id,
            e
        ),
    }
}

async fn announce_level_up(
    ctx: &Context,
    outcome: &ExperienceOutcome,
    name: &str,
    activity: Activity,
) {
    if !outcome.gain.leveled_up() {
        return;
    }
    let Some(channel_id) = outcome.levels_channel_id else {
        return;
    };

    let text = reply::level_up(
        name,
        outcome.gain.current.level,
        outcome.level_title.as_deref(),
        activity,
    );

    if let Err(e) = ChannelId::new(channel_id).say(&ctx.http, text).await {
        tracing::warn!(
            "Failed to announce level-up in channel {}: {:?}",
            channel_id,
            e
        );
    }
}
