//! Error types for the bot.
//!
//! `AppError` is the top-level error returned by services, repositories wrapped by
//! services, startup and the scheduler. Event handlers log it and carry on, since a
//! failed experience grant should never take the bot down.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::{
    error::{config::ConfigError, internal::InternalError},
    leveling::LevelingError,
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Invalid input to the leveling engine.
    #[error(transparent)]
    LevelingErr(#[from] LevelingError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected state indicating a bug or corrupt data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Requested record does not exist.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid user input, typically a malformed command argument.
    ///
    /// # Fields
    /// - Message shown back to the user
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
