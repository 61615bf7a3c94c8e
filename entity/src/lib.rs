//! SeaORM entities for the leveling bot.

pub mod prelude;

pub mod level;
pub mod member;
pub mod player;
pub mod server;
