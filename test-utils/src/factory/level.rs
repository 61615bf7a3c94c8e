//! Level factory for creating memoized level rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test levels.
///
/// The experience cost is taken as given; tests that need the real curve should
/// compute it with the leveling engine.
pub struct LevelFactory<'a> {
    db: &'a DatabaseConnection,
    value: i32,
    exp: i64,
    title: Option<String>,
}

impl<'a> LevelFactory<'a> {
    /// Creates a new LevelFactory for `value` with a flat cost of 1000 and no title.
    pub fn new(db: &'a DatabaseConnection, value: i32) -> Self {
        Self {
            db,
            value,
            exp: 1000,
            title: None,
        }
    }

    pub fn exp(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builds and inserts the level entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::level::Model)` - Created level entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate value or title)
    pub async fn build(self) -> Result<entity::level::Model, DbErr> {
        entity::level::ActiveModel {
            value: ActiveValue::Set(self.value),
            title: ActiveValue::Set(self.title),
            exp: ActiveValue::Set(self.exp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a level with default cost and no title.
pub async fn create_level(
    db: &DatabaseConnection,
    value: i32,
) -> Result<entity::level::Model, DbErr> {
    LevelFactory::new(db, value).build().await
}
