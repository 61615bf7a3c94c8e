use serenity::all::{Context, Message};

use crate::{
    bot::{
        command,
        handler::{activity::reward_activity, command::execute},
        reply::Activity,
    },
    state::AppState,
};

/// Handles a message sent in a channel.
///
/// Guild messages from users earn experience; messages that are commands are then
/// executed.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }
    // Only guild channels, not DMs
    let Some(guild_id) = message.guild_id else {
        return;
    };

    reward_activity(
        state,
        &ctx,
        guild_id,
        &message.author,
        state.config.experience.message,
        Activity::Message,
    )
    .await;

    match command::parse(&message.content) {
        Ok(Some(command)) => execute(state, &ctx, &message, guild_id, command).await,
        Ok(None) => {}
        Err(e) => {
            if let Err(e) = message.channel_id.say(&ctx.http, e.to_string()).await {
                tracing::warn!("Failed to send usage reply: {:?}", e);
            }
        }
    }
}
