//! Business logic between Discord events and the repository layer.
//!
//! Services own transactions and combine repository calls; they return domain models
//! and propagate every error to the caller.

pub mod experience;
pub mod level;
pub mod player;
pub mod ranking;
pub mod server;

pub use experience::ExperienceService;
pub use level::LevelService;
pub use player::PlayerService;
pub use ranking::RankingService;
pub use server::ServerService;
