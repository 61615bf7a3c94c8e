//! Experience grants.
//!
//! Every activity that earns experience (messages, reactions, voice ticks) ends up in
//! [`ExperienceService::grant`], which runs the leveling engine on the member's stored
//! progress and persists the result.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::Mutex;

use crate::{
    data::{LevelRepository, MemberRepository, PlayerRepository, ServerRepository},
    error::AppError,
    leveling::LevelingError,
    model::{
        member::{ExperienceOutcome, GrantExperienceParam},
        player::UpsertPlayerParam,
        server::UpsertServerParam,
    },
};

pub struct ExperienceService<'a> {
    db: &'a DatabaseConnection,
    lock: &'a Mutex<()>,
}

impl<'a> ExperienceService<'a> {
    /// Creates a new ExperienceService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `lock` - Process-wide grant lock, see `AppState::experience_lock`
    pub fn new(db: &'a DatabaseConnection, lock: &'a Mutex<()>) -> Self {
        Self { db, lock }
    }

    /// Grants experience to a player on a server.
    ///
    /// Server, player and member rows are created on first activity. The member's
    /// progress is resolved through the leveling engine, the level table is extended
    /// to cover the next level, and the amount is added to the server total. All of it
    /// happens in one transaction while holding the grant lock.
    ///
    /// A zero amount is valid and only makes sure the member exists.
    ///
    /// # Returns
    /// - `Ok(ExperienceOutcome)` - Updated member, progress change and announcement target
    /// - `Err(AppError::LevelingErr)` - Negative amount or progress overflow
    /// - `Err(AppError::DbErr)` - Database error, the transaction is rolled back
    pub async fn grant(&self, param: GrantExperienceParam) -> Result<ExperienceOutcome, AppError> {
        if param.amount < 0 {
            return Err(LevelingError::InvalidExperience(param.amount).into());
        }

        let _guard = self.lock.lock().await;
        let txn = self.db.begin().await?;

        let server_repo = ServerRepository::new(&txn);
        let server = server_repo
            .upsert(UpsertServerParam {
                discord_id: param.server_id,
                name: param.server_name,
            })
            .await?;

        PlayerRepository::new(&txn)
            .upsert(UpsertPlayerParam {
                discord_id: param.player_id,
                name: param.player_name,
            })
            .await?;

        let member_repo = MemberRepository::new(&txn);
        let member = member_repo
            .get_or_create(param.player_id, param.server_id)
            .await?;

        let gain = member.progress.gain(param.amount)?;
        let member = member_repo.update_progress(member.id, gain.current).await?;

        let next_level = gain
            .current
            .level
            .checked_add(1)
            .ok_or(LevelingError::Overflow)?;
        let level_repo = LevelRepository::new(&txn);
        level_repo.ensure_up_to(next_level).await?;

        let level_title = if gain.leveled_up() {
            level_repo
                .get_by_value(gain.current.level)
                .await?
                .and_then(|level| level.title)
        } else {
            None
        };

        if param.amount > 0 {
            server_repo
                .add_experience(param.server_id, param.amount)
                .await?;
        }

        txn.commit().await?;

        if gain.leveled_up() {
            tracing::info!(
                "Player {} gained {} level(s) on server {}, now level {}",
                param.player_id,
                gain.levels_gained(),
                param.server_id,
                gain.current.level
            );
        }

        Ok(ExperienceOutcome {
            member,
            gain,
            levels_channel_id: server.levels_channel_id,
            level_title,
        })
    }
}
