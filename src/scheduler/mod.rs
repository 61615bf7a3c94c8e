//! Cron jobs driving time-based experience and announcements.

use std::sync::Arc;

use serenity::cache::Cache;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, state::AppState};

pub mod heartbeat;
pub mod voice_experience;
pub mod weekly_top;

/// Every minute.
const VOICE_EXPERIENCE_SCHEDULE: &str = "0 * * * * *";

/// Saturdays at 12:00 UTC.
const WEEKLY_TOP_SCHEDULE: &str = "0 0 12 * * Sat";

/// Every hour.
const HEARTBEAT_SCHEDULE: &str = "0 0 * * * *";

/// Starts the scheduler with all jobs.
///
/// # Arguments
/// - `state` - Application state
/// - `http` - Discord HTTP client for posting messages
/// - `cache` - Discord cache with guilds and voice states
pub async fn start_scheduler(
    state: AppState,
    http: Arc<Http>,
    cache: Arc<Cache>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let job_http = http.clone();
    let job_cache = cache.clone();
    let voice_job = Job::new_async(VOICE_EXPERIENCE_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = voice_experience::run(&state, &http, &cache).await {
                tracing::error!("Error granting voice experience: {}", e);
            }
        })
    })?;

    let job_state = state.clone();
    let job_http = http.clone();
    let weekly_job = Job::new_async(WEEKLY_TOP_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();
        let http = job_http.clone();

        Box::pin(async move {
            if let Err(e) = weekly_top::run(&state, &http).await {
                tracing::error!("Error posting weekly top: {}", e);
            }
        })
    })?;

    let job_state = state;
    let job_cache = cache;
    let heartbeat_job = Job::new_async(HEARTBEAT_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            if let Err(e) = heartbeat::run(&state, &cache).await {
                tracing::error!("Error refreshing servers: {}", e);
            }
        })
    })?;

    scheduler.add(voice_job).await?;
    scheduler.add(weekly_job).await?;
    scheduler.add(heartbeat_job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduler started");

    Ok(())
}
