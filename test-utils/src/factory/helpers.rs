//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Starts high enough to look like a Discord snowflake when used as an ID.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(100_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player, a server and a member linking both, all with defaults.
///
/// # Returns
/// - `Ok((player, server, member))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player::Model,
        entity::server::Model,
        entity::member::Model,
    ),
    DbErr,
> {
    let player = super::player::create_player(db).await?;
    let server = super::server::create_server(db).await?;
    let member = super::member::create_member(db, &player.discord_id, &server.discord_id).await?;

    Ok((player, server, member))
}
