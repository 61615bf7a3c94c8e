use serenity::all::ChannelId;
use serenity::http::Http;

use crate::{
    bot::reply,
    error::AppError,
    service::{ranking::DEFAULT_TOP_LIMIT, RankingService, ServerService},
    state::AppState,
};

/// Posts the top members of every server with a levels channel.
///
/// A failure for one server is logged and does not stop the others.
pub async fn run(state: &AppState, http: &Http) -> Result<(), AppError> {
    let servers = ServerService::new(&state.db).get_with_levels_channel().await?;
    let ranking = RankingService::new(&state.db);

    for server in servers {
        let Some(channel_id) = server.levels_channel_id else {
            continue;
        };

        let members = match ranking.top(server.discord_id, DEFAULT_TOP_LIMIT).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!("Failed to load top of server {}: {}", server.discord_id, e);
                continue;
            }
        };

        let text = reply::top(
            &reply::weekly_top_title(&server.name),
            &members,
            &state.config.app_url,
            server.discord_id,
        );

        if let Err(e) = ChannelId::new(channel_id).say(http, text).await {
            tracing::warn!(
                "Failed to post weekly top of server {} in channel {}: {:?}",
                server.discord_id,
                channel_id,
                e
            );
        }
    }

    Ok(())
}
