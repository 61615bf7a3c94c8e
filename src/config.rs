use crate::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "https://bot.hellshade.fi";

const DEFAULT_EXP_PER_MESSAGE: i64 = 25;
const DEFAULT_EXP_PER_REACTION: i64 = 10;
const DEFAULT_EXP_VOICE_BASE: i64 = 5;

/// Experience granted for each kind of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRates {
    /// Experience for sending a message
    pub message: i64,
    /// Experience for adding a reaction
    pub reaction: i64,
    /// Base experience per minute spent in a voice channel, scaled by channel size
    pub voice_base: i64,
}

impl Default for ExperienceRates {
    fn default() -> Self {
        Self {
            message: DEFAULT_EXP_PER_MESSAGE,
            reaction: DEFAULT_EXP_PER_REACTION,
            voice_base: DEFAULT_EXP_VOICE_BASE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Discord ids allowed to run admin commands.
    pub admins: Vec<u64>,
    /// Public site URL linked from bot replies.
    pub app_url: String,

    pub experience: ExperienceRates,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            admins: match std::env::var("ADMINS") {
                Ok(value) => parse_admins(&value)?,
                Err(_) => Vec::new(),
            },
            app_url: std::env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            experience: ExperienceRates {
                message: env_amount("EXP_PER_MESSAGE", DEFAULT_EXP_PER_MESSAGE)?,
                reaction: env_amount("EXP_PER_REACTION", DEFAULT_EXP_PER_REACTION)?,
                voice_base: env_amount("EXP_VOICE_BASE", DEFAULT_EXP_VOICE_BASE)?,
            },
        })
    }

    pub fn is_admin(&self, discord_id: u64) -> bool {
        self.admins.contains(&discord_id)
    }
}

/// Parses a comma separated list of Discord ids, ignoring blank entries.
fn parse_admins(value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "ADMINS".to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Reads a non-negative experience amount, falling back to `default` when unset.
fn env_amount(name: &str, default: i64) -> Result<i64, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(default);
    };

    parse_amount(name, &value)
}

fn parse_amount(name: &str, value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let amount = value.trim().parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    if amount < 0 {
        return Err(invalid("experience amounts cannot be negative".to_string()));
    }

    Ok(amount)
}
