//! Member data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    leveling::Progress,
    model::member::{Member, RankedMember},
};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the member of a player on a server.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - Player has no progress on this server yet
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find(&self, player_id: u64, server_id: u64) -> Result<Option<Member>, AppError> {
        let entity = entity::prelude::Member::find()
            .filter(entity::member::Column::PlayerId.eq(player_id.to_string()))
            .filter(entity::member::Column::ServerId.eq(server_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Member::from_entity).transpose()
    }

    /// Gets the member of a player on a server, creating it at level 0 if missing.
    ///
    /// Player and server rows must already exist.
    ///
    /// # Returns
    /// - `Ok(Member)` - Existing or newly created member
    /// - `Err(AppError::DbErr)` - Database error, including missing player or server
    pub async fn get_or_create(&self, player_id: u64, server_id: u64) -> Result<Member, AppError> {
        if let Some(member) = self.find(player_id, server_id).await? {
            return Ok(member);
        }

        let entity = entity::member::ActiveModel {
            player_id: ActiveValue::Set(player_id.to_string()),
            server_id: ActiveValue::Set(server_id.to_string()),
            level: ActiveValue::Set(0),
            exp: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Stores new progress for a member.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::NotFound)` - No member with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_progress(&self, id: i32, progress: Progress) -> Result<Member, AppError> {
        let Some(existing) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        };

        let mut active: entity::member::ActiveModel = existing.into();
        active.level = ActiveValue::Set(progress.level);
        active.exp = ActiveValue::Set(progress.experience);

        let entity = active.update(self.db).await?;

        Member::from_entity(entity)
    }

    /// Gets the highest ranked members of a server with their player names.
    ///
    /// Members are ordered by level, then by experience within the level.
    ///
    /// # Arguments
    /// - `server_id` - Discord ID of the server
    /// - `limit` - Maximum number of members to return
    pub async fn get_top(&self, server_id: u64, limit: u64) -> Result<Vec<RankedMember>, AppError> {
        let rows = entity::prelude::Member::find()
            .filter(entity::member::Column::ServerId.eq(server_id.to_string()))
            .order_by_desc(entity::member::Column::Level)
            .order_by_desc(entity::member::Column::Exp)
            .order_by_asc(entity::member::Column::Id)
            .limit(limit)
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(member, player)| {
                let name = player
                    .map(|p| p.name)
                    .unwrap_or_else(|| format!("User {}", member.player_id));

                Ok(RankedMember {
                    member: Member::from_entity(member)?,
                    name,
                })
            })
            .collect()
    }

    /// Gets the 1-based leaderboard position of the given progress on a server.
    ///
    /// Members with identical progress share a position.
    pub async fn get_rank(&self, server_id: u64, progress: Progress) -> Result<u64, AppError> {
        let ahead = entity::prelude::Member::find()
            .filter(entity::member::Column::ServerId.eq(server_id.to_string()))
            .filter(
                Condition::any()
                    .add(entity::member::Column::Level.gt(progress.level))
                    .add(
                        Condition::all()
                            .add(entity::member::Column::Level.eq(progress.level))
                            .add(entity::member::Column::Exp.gt(progress.experience)),
                    ),
            )
            .count(self.db)
            .await?;

        Ok(ahead + 1)
    }
}
