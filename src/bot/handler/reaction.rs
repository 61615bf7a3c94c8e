use serenity::all::{Context, Reaction};

use crate::{
    bot::{handler::activity::reward_activity, reply::Activity},
    state::AppState,
};

/// Handles a reaction added to a message.
///
/// The reacting user earns experience.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some(guild_id) = reaction.guild_id else {
        return;
    };

    let user = match reaction.user(&ctx).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Failed to resolve reacting user: {:?}", e);
            return;
        }
    };
    if user.bot {
        return;
    }

    reward_activity(
        state,
        &ctx,
        guild_id,
        &user,
        state.config.experience.reaction,
        Activity::Reaction,
    )
    .await;
}
