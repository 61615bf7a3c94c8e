mod bot;
mod config;
mod data;
mod error;
mod leveling;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{bot::start, config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config);

    tracing::info!("Starting Hellshade bot");

    let (client, http, cache) = start::init_bot(state.clone()).await?;

    scheduler::start_scheduler(state, http, cache).await?;

    start::start_bot(client).await
}
