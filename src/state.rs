//! Application state shared across event handlers and scheduled jobs.
//!
//! The state is built once during startup and cloned into the Discord event handler
//! and every scheduler job. All fields are cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Configuration loaded from the environment at startup.
    pub config: Arc<Config>,

    /// Serializes experience grants.
    ///
    /// Held for the whole read-modify-write of a member's progress so that message,
    /// reaction and voice events for the same member never overwrite each other.
    pub experience_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Connected database with migrations applied
    /// - `config` - Application configuration
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            experience_lock: Arc::new(Mutex::new(())),
        }
    }
}
