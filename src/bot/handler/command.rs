//! Command execution.

use serenity::all::{Channel, ChannelId, Context, GuildId, Message};

use crate::{
    bot::{command::Command, handler::activity::guild_name, reply},
    error::AppError,
    model::{player::UpsertPlayerParam, server::UpsertServerParam},
    service::{LevelService, PlayerService, RankingService, ServerService},
    state::AppState,
};

/// Runs a parsed command and replies in the channel it was sent in.
pub async fn execute(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    guild_id: GuildId,
    command: Command,
) {
    let text = match run(state, ctx, message, guild_id, command.clone()).await {
        Ok(text) => text,
        Err(AppError::BadRequest(text)) => text,
        Err(e) => {
            tracing::error!("Command {:?} failed: {:?}", command, e);
            "Something went wrong, please try again later.".to_string()
        }
    };

    if let Err(e) = message.channel_id.say(&ctx.http, text).await {
        tracing::warn!(
            "Failed to reply to command in channel {}: {:?}",
            message.channel_id,
            e
        );
    }
}

async fn run(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    guild_id: GuildId,
    command: Command,
) -> Result<String, AppError> {
    let server_name = guild_name(ctx, guild_id);
    let server_id = guild_id.get();

    match command {
        Command::Rank => {
            let standing = RankingService::new(&state.db)
                .standing(server_id, message.author.id.get())
                .await?;

            Ok(match standing {
                Some(standing) => reply::rank(
                    &message.author.name,
                    &server_name,
                    &standing,
                    &state.config.app_url,
                ),
                None => reply::no_rank(&server_name),
            })
        }
        Command::Top(count) => {
            let members = RankingService::new(&state.db)
                .top(server_id, count)
                .await?;

            Ok(reply::top(
                &reply::top_title(members.len(), &server_name),
                &members,
                &state.config.app_url,
                server_id,
            ))
        }
        Command::Register => {
            PlayerService::new(&state.db)
                .register(UpsertPlayerParam {
                    discord_id: message.author.id.get(),
                    name: message.author.name.clone(),
                })
                .await?;

            Ok(reply::registered(&state.config.app_url))
        }
        Command::LevelTitle { level, title } => {
            if !state.config.is_admin(message.author.id.get()) {
                tracing::warn!("User {} tried to set a level title", message.author.id);
                return Ok(reply::UNAUTHORIZED.to_string());
            }

            let level = LevelService::new(&state.db).set_title(level, title).await?;

            Ok(reply::level_title_set(level.value, level.title.as_deref()))
        }
        Command::LevelsChannel(channel_id) => {
            if !state.config.is_admin(message.author.id.get()) {
                tracing::warn!(
                    "User {} tried to change the levels channel of server {}",
                    message.author.id,
                    server_id
                );
                return Ok(reply::UNAUTHORIZED.to_string());
            }

            let service = ServerService::new(&state.db);
            let server = UpsertServerParam {
                discord_id: server_id,
                name: server_name.clone(),
            };

            let Some(channel_id) = channel_id else {
                let server = service.upsert(server).await?;
                return Ok(reply::levels_channel_status(
                    &server_name,
                    server.levels_channel_id,
                ));
            };

            if !is_guild_channel(ctx, guild_id, channel_id).await {
                return Ok(reply::CHANNEL_NOT_FOUND.to_string());
            }

            service.set_levels_channel(server, Some(channel_id)).await?;
            tracing::info!(
                "Levels channel of server {} set to {}",
                server_id,
                channel_id
            );

            Ok(reply::levels_channel_set(channel_id))
        }
    }
}

/// Whether the channel exists and belongs to the guild.
async fn is_guild_channel(ctx: &Context, guild_id: GuildId, channel_id: u64) -> bool {
    match ChannelId::new(channel_id).to_channel(ctx).await {
        Ok(Channel::Guild(channel)) => channel.guild_id == guild_id,
        Ok(_) => false,
        Err(e) => {
            tracing::debug!("Channel {} lookup failed: {:?}", channel_id, e);
            false
        }
    }
}
