use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::cache::Cache;
use serenity::http::Http;

use crate::{bot::handler::Handler, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents and must be enabled in
/// the Discord Developer Portal.
///
/// # Returns
/// - `Ok((Client, Arc<Http>, Arc<Cache>))` - Client plus the HTTP client and cache
///   shared with scheduled jobs
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(state: AppState) -> Result<(Client, Arc<Http>, Arc<Cache>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::MESSAGE_CONTENT;

    let token = state.config.discord_bot_token.clone();
    let client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();
    let cache = client.cache.clone();

    Ok((client, http, cache))
}

/// Connects the client and processes events until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
