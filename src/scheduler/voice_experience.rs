//! Experience for time spent in voice channels.
//!
//! Each tick takes a snapshot of the voice states in the cache, decides who earns
//! experience and grants it. Level-ups are collected per levels channel and posted as
//! one summary message per channel.

use std::collections::HashMap;

use serenity::all::ChannelId;
use serenity::cache::Cache;
use serenity::http::Http;

use crate::{
    bot::reply::{self, LevelUp},
    error::AppError,
    leveling::voice_tick_experience,
    model::member::GrantExperienceParam,
    service::ExperienceService,
    state::AppState,
};

/// Minimum number of users in a voice channel for anyone in it to earn experience.
const MIN_CHANNEL_MEMBERS: usize = 2;

/// A user connected to a voice channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceParticipant {
    pub user_id: u64,
    pub name: String,
    pub channel_id: u64,
    pub bot: bool,
    pub self_deaf: bool,
}

/// Voice state of a single guild at the time of the tick.
#[derive(Debug, Clone)]
pub struct VoiceGuild {
    pub server_id: u64,
    pub server_name: String,
    pub afk_channel_id: Option<u64>,
    pub participants: Vec<VoiceParticipant>,
}

/// Experience earned by one participant during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceGrant {
    pub user_id: u64,
    pub name: String,
    pub amount: i64,
}

/// Decides who earns experience in a guild and how much.
///
/// Everyone in a channel counts towards its size, including bots and deafened users,
/// but only users that are not bots, not self-deafened and not in the AFK channel earn
/// experience. Channels with fewer than two users earn nothing.
pub fn eligible_grants(guild: &VoiceGuild, base: i64) -> Vec<VoiceGrant> {
    let mut channel_sizes: HashMap<u64, usize> = HashMap::new();
    for participant in &guild.participants {
        *channel_sizes.entry(participant.channel_id).or_default() += 1;
    }

    guild
        .participants
        .iter()
        .filter(|p| !p.bot && !p.self_deaf)
        .filter(|p| guild.afk_channel_id != Some(p.channel_id))
        .filter_map(|p| {
            let size = channel_sizes.get(&p.channel_id).copied().unwrap_or(0);
            if size < MIN_CHANNEL_MEMBERS {
                return None;
            }

            Some(VoiceGrant {
                user_id: p.user_id,
                name: p.name.clone(),
                amount: voice_tick_experience(size, base),
            })
        })
        .collect()
}

/// Reads the voice states of all cached guilds.
///
/// Users missing from the member cache are treated as regular users.
fn snapshot(cache: &Cache) -> Vec<VoiceGuild> {
    cache
        .guilds()
        .into_iter()
        .filter_map(|guild_id| {
            let guild = cache.guild(guild_id)?;

            let participants = guild
                .voice_states
                .values()
                .filter_map(|state| {
                    let channel_id = state.channel_id?;
                    let user = state
                        .member
                        .as_ref()
                        .map(|m| &m.user)
                        .or_else(|| guild.members.get(&state.user_id).map(|m| &m.user));

                    Some(VoiceParticipant {
                        user_id: state.user_id.get(),
                        name: user
                            .map(|u| u.name.clone())
                            .unwrap_or_else(|| format!("User {}", state.user_id)),
                        channel_id: channel_id.get(),
                        bot: user.map(|u| u.bot).unwrap_or(false),
                        self_deaf: state.self_deaf,
                    })
                })
                .collect();

            Some(VoiceGuild {
                server_id: guild_id.get(),
                server_name: guild.name.clone(),
                afk_channel_id: guild
                    .afk_metadata
                    .as_ref()
                    .map(|afk| afk.afk_channel_id.get()),
                participants,
            })
        })
        .collect()
}

/// Grants one tick of voice experience to every eligible user.
pub async fn run(state: &AppState, http: &Http, cache: &Cache) -> Result<(), AppError> {
    let service = ExperienceService::new(&state.db, &state.experience_lock);
    let base = state.config.experience.voice_base;

    let mut level_ups: HashMap<u64, Vec<LevelUp>> = HashMap::new();
    let mut granted = 0;

    for guild in snapshot(cache) {
        for grant in eligible_grants(&guild, base) {
            let result = service
                .grant(GrantExperienceParam {
                    server_id: guild.server_id,
                    server_name: guild.server_name.clone(),
                    player_id: grant.user_id,
                    player_name: grant.name.clone(),
                    amount: grant.amount,
                })
                .await;

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(
                        "Failed to grant voice experience to {} on server {}: {}",
                        grant.user_id,
                        guild.server_id,
                        e
                    );
                    continue;
                }
            };
            granted += 1;

            if let (true, Some(channel_id)) =
                (outcome.gain.leveled_up(), outcome.levels_channel_id)
            {
                level_ups.entry(channel_id).or_default().push(LevelUp {
                    name: grant.name,
                    level: outcome.gain.current.level,
                });
            }
        }
    }

    for (channel_id, level_ups) in level_ups {
        let text = reply::voice_level_ups(&level_ups);
        if let Err(e) = ChannelId::new(channel_id).say(http, text).await {
            tracing::warn!(
                "Failed to post voice level-ups in channel {}: {:?}",
                channel_id,
                e
            );
        }
    }

    tracing::debug!("Voice experience granted to {} members", granted);

    Ok(())
}
