use serenity::all::{Context, Member};

use crate::{
    bot::handler::activity::guild_name, model::member::GrantExperienceParam,
    service::ExperienceService, state::AppState,
};

/// Handles a member joining a guild.
///
/// Enrolls the member at level 0 so they show up on the leaderboard right away.
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let server_id = new_member.guild_id.get();
    let player_id = new_member.user.id.get();

    let service = ExperienceService::new(&state.db, &state.experience_lock);
    let result = service
        .grant(GrantExperienceParam {
            server_id,
            server_name: guild_name(&ctx, new_member.guild_id),
            player_id,
            player_name: new_member.user.name.clone(),
            amount: 0,
        })
        .await;

    match result {
        Ok(_) => tracing::debug!("Enrolled player {} on server {}", player_id, server_id),
        Err(e) => tracing::error!(
            "Failed to enroll player {} on server {}: {:?}",
            player_id,
            server_id,
            e
        ),
    }
}
