//! Text command parsing.
//!
//! Commands are plain messages starting with `!`. Parsing is kept separate from
//! execution so malformed input can be rejected before any database work.

use crate::{error::AppError, service::ranking::DEFAULT_TOP_LIMIT};

pub const PREFIX: char = '!';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!rank` or `!my_exp`
    Rank,
    /// `!top [n]` or `!top5`
    Top(u64),
    /// `!register`
    Register,
    /// `!levels_channel [channel]`, admins only
    LevelsChannel(Option<u64>),
    /// `!level_title <level> [title]`, admins only; no title clears it
    LevelTitle { level: i32, title: Option<String> },
}

/// Parses a message into a command.
///
/// # Returns
/// - `Ok(Some(Command))` - Message is a known command
/// - `Ok(None)` - Message is not a command, or not one of ours
/// - `Err(AppError::BadRequest)` - Known command with a malformed argument
pub fn parse(content: &str) -> Result<Option<Command>, AppError> {
    let Some(rest) = content.trim().strip_prefix(PREFIX) else {
        return Ok(None);
    };

    let mut parts = rest.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(None);
    };
    let argument = parts.next();
    let remainder = parts.collect::<Vec<_>>().join(" ");

    let command = match name.to_lowercase().as_str() {
        "rank" | "my_exp" => Command::Rank,
        "top" | "top5" => Command::Top(match argument {
            Some(value) => parse_count(value)?,
            None => DEFAULT_TOP_LIMIT,
        }),
        "register" => Command::Register,
        "levels_channel" => Command::LevelsChannel(argument.map(parse_channel).transpose()?),
        "level_title" => Command::LevelTitle {
            level: parse_level(argument)?,
            title: Some(remainder).filter(|title| !title.is_empty()),
        },
        _ => return Ok(None),
    };

    Ok(Some(command))
}

fn parse_count(value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("Usage: {}top [count]", PREFIX)))
}

fn parse_level(value: Option<&str>) -> Result<i32, AppError> {
    value
        .and_then(|v| v.parse::<i32>().ok())
        .filter(|level| *level >= 1)
        .ok_or_else(|| {
            AppError::BadRequest(format!("Usage: {}level_title <level> [title]", PREFIX))
        })
}

/// Accepts a raw channel ID or a channel mention such as `<#123>`.
fn parse_channel(value: &str) -> Result<u64, AppError> {
    let id = value
        .strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(value);

    id.parse::<u64>().map_err(|_| {
        AppError::BadRequest(format!("Usage: {}levels_channel [channel_id]", PREFIX))
    })
}
