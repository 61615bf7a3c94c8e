//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::create_player(&db).await?;
//! let server = factory::create_server(&db).await?;
//! let member = factory::member::MemberFactory::new(&db, &player.discord_id, &server.discord_id)
//!     .level(3)
//!     .exp(120)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod level;
pub mod member;
pub mod player;
pub mod server;

pub use helpers::create_member_with_dependencies;
pub use level::create_level;
pub use member::create_member;
pub use player::create_player;
pub use server::create_server;
