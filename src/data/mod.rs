//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`. They are generic over `ConnectionTrait` so services can run several
//! repository calls inside one transaction.

pub mod level;
pub mod member;
pub mod player;
pub mod server;

pub use level::LevelRepository;
pub use member::MemberRepository;
pub use player::PlayerRepository;
pub use server::ServerRepository;

#[cfg(test)]
mod test;
