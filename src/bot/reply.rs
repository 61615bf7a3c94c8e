//! Plain text replies and announcements.

use crate::{
    model::member::{MemberStanding, RankedMember},
    util::progress_bar::default_progress_bar,
};

/// Activity that earned the experience behind a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Message,
    Reaction,
    Voice,
}

impl Activity {
    fn describe(self) -> &'static str {
        match self {
            Activity::Message => "sending messages",
            Activity::Reaction => "reacting to messages",
            Activity::Voice => "being active on a voice channel",
        }
    }
}

/// A member who leveled up during a voice tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub name: String,
    pub level: i32,
}

pub const UNAUTHORIZED: &str = "Unauthorized: you don't have permissions to use this command :/";

pub const CHANNEL_NOT_FOUND: &str = "Error: channel not found.";

pub fn level_up(name: &str, level: i32, title: Option<&str>, activity: Activity) -> String {
    let title = title.map(|t| format!(" ({})", t)).unwrap_or_default();

    format!(
        "**{}** leveled up to level **{}**{} by {}!",
        name,
        level,
        title,
        activity.describe()
    )
}

/// Summary of all members of one server who leveled up in the same voice tick.
pub fn voice_level_ups(level_ups: &[LevelUp]) -> String {
    let players = if level_ups.len() == 1 {
        "1 player".to_string()
    } else {
        format!("{} players", level_ups.len())
    };
    let header = format!(
        "{} leveled up by {}.",
        players,
        Activity::Voice.describe()
    );

    let lines: Vec<String> = level_ups
        .iter()
        .map(|l| format!("- {}: Leveled up to **Level {}**", l.name, l.level))
        .collect();

    format!("{}\n{}", header, lines.join("\n"))
}

pub fn rank(name: &str, server_name: &str, standing: &MemberStanding, app_url: &str) -> String {
    let progress = standing.member.progress;

    format!(
        "**{}** on **{}** (rank #{})\n\
         **Level {}** - Experience: **{}/{}**\n\
         Progress: **{:.2}%** `{}`\n\
         More data can be found at {}/players/{}",
        name,
        server_name,
        standing.rank,
        progress.level,
        progress.experience,
        standing.next_threshold,
        standing.percent(),
        default_progress_bar(progress.experience, standing.next_threshold),
        app_url,
        standing.member.player_id
    )
}

pub fn no_rank(server_name: &str) -> String {
    format!("You have not earned any experience on **{}** yet.", server_name)
}

/// Leaderboard listing, used by the top command and the weekly post.
pub fn top(title: &str, members: &[RankedMember], app_url: &str, server_id: u64) -> String {
    if members.is_empty() {
        return format!("{}\nNo one has earned experience here yet.", title);
    }

    let lines: Vec<String> = members
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{}. **{}** - LVL: **{}** - EXP: **{}**",
                i + 1,
                m.name,
                m.member.progress.level,
                m.member.progress.experience
            )
        })
        .collect();

    format!(
        "{}\n{}\nMore data can be found at {}/servers/{}",
        title,
        lines.join("\n"),
        app_url,
        server_id
    )
}

pub fn top_title(count: usize, server_name: &str) -> String {
    format!("**TOP {}** on **{}**", count, server_name)
}

pub fn weekly_top_title(server_name: &str) -> String {
    format!("Weekly TOP 5 on **{}**", server_name)
}

pub fn registered(app_url: &str) -> String {
    format!(
        "Success! You have successfully registered yourself. You are now shown on {}",
        app_url
    )
}

pub fn levels_channel_set(channel_id: u64) -> String {
    format!("Success: levels channel set to <#{}>.", channel_id)
}

pub fn level_title_set(level: i32, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("Success: level **{}** is now titled **{}**.", level, title),
        None => format!("Success: title of level **{}** cleared.", level),
    }
}

pub fn levels_channel_status(server_name: &str, channel_id: Option<u64>) -> String {
    match channel_id {
        Some(id) => format!("Levels channel for **{}**: <#{}>", server_name, id),
        None => format!(
            "Levels channel for **{}**: no channel for levels.\n\
             Create a new text channel and run this command with the channel ID as an argument.",
            server_name
        ),
    }
}
