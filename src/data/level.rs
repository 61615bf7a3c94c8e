//! Level data repository.
//!
//! The level table memoizes the threshold curve so listings and external tools can
//! read costs without recomputing them, and lets admins attach titles to levels.
//! Rows are derived from `leveling::threshold` and never change once written.

use std::collections::HashSet;

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

use crate::{
    error::AppError,
    leveling::{threshold, LevelingError},
    model::level::Level,
};

/// Rows per INSERT statement; three bound parameters per row must stay below
/// SQLite's 999 parameter limit.
const INSERT_BATCH_SIZE: usize = 300;

pub struct LevelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LevelRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a memoized level by its value.
    pub async fn get_by_value(&self, value: i32) -> Result<Option<Level>, AppError> {
        let entity = entity::prelude::Level::find_by_id(value).one(self.db).await?;

        Ok(entity.map(Level::from_entity))
    }

    /// Finds the level carrying a title.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Level>, AppError> {
        let entity = entity::prelude::Level::find()
            .filter(entity::level::Column::Title.eq(title))
            .one(self.db)
            .await?;

        Ok(entity.map(Level::from_entity))
    }

    /// Gets a level, computing and storing it first if it is not memoized yet.
    ///
    /// # Returns
    /// - `Ok(Level)` - The stored level
    /// - `Err(AppError::LevelingErr)` - `value` is below 1
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn get_or_create(&self, value: i32) -> Result<Level, AppError> {
        if let Some(level) = self.get_by_value(value).await? {
            return Ok(level);
        }

        let exp = threshold(value)?;
        entity::prelude::Level::insert(entity::level::ActiveModel {
            value: ActiveValue::Set(value),
            title: ActiveValue::Set(None),
            exp: ActiveValue::Set(exp),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(Level {
            value,
            title: None,
            exp,
        })
    }

    /// Memoizes every level from 1 up to and including `max_value`.
    ///
    /// Only missing levels are inserted, in batches of `INSERT_BATCH_SIZE` rows.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of levels inserted
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn ensure_up_to(&self, max_value: i32) -> Result<u64, AppError> {
        if max_value < 1 {
            return Ok(0);
        }

        let stored = entity::prelude::Level::find()
            .filter(entity::level::Column::Value.between(1, max_value))
            .count(self.db)
            .await?;
        if stored >= max_value as u64 {
            return Ok(0);
        }

        let existing: HashSet<i32> = entity::prelude::Level::find()
            .select_only()
            .column(entity::level::Column::Value)
            .filter(entity::level::Column::Value.between(1, max_value))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let mut missing = (1..=max_value).filter(|value| !existing.contains(value));
        let mut inserted = 0;

        loop {
            let batch = missing
                .by_ref()
                .take(INSERT_BATCH_SIZE)
                .map(|value| {
                    Ok(entity::level::ActiveModel {
                        value: ActiveValue::Set(value),
                        title: ActiveValue::Set(None),
                        exp: ActiveValue::Set(threshold(value)?),
                    })
                })
                .collect::<Result<Vec<_>, LevelingError>>()?;

            if batch.is_empty() {
                break;
            }

            inserted += batch.len() as u64;
            entity::prelude::Level::insert_many(batch)
                .exec_without_returning(self.db)
                .await?;
        }

        tracing::debug!("Memoized {} levels up to level {}", inserted, max_value);

        Ok(inserted)
    }

    /// Sets or clears the title of a level, memoizing the level first if needed.
    ///
    /// # Returns
    /// - `Ok(Level)` - The level with its new title
    /// - `Err(AppError::DbErr)` - Database error, including a title already used by
    ///   another level
    pub async fn set_title(&self, value: i32, title: Option<String>) -> Result<Level, AppError> {
        self.get_or_create(value).await?;

        entity::prelude::Level::update_many()
            .filter(entity::level::Column::Value.eq(value))
            .col_expr(
                entity::level::Column::Title,
                sea_orm::sea_query::Expr::value(title),
            )
            .exec(self.db)
            .await?;

        self.get_by_value(value)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Level {} not found", value)))
    }
}
