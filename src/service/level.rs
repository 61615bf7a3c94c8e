use sea_orm::DatabaseConnection;

use crate::{data::LevelRepository, error::AppError, model::level::Level};

pub struct LevelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets or clears the display title of a level.
    ///
    /// # Returns
    /// - `Ok(Level)` - The titled level
    /// - `Err(AppError::BadRequest)` - Another level already uses the title
    /// - `Err(AppError)` - Invalid level or database error
    pub async fn set_title(&self, value: i32, title: Option<String>) -> Result<Level, AppError> {
        let repo = LevelRepository::new(self.db);

        if let Some(title) = &title {
            if let Some(owner) = repo.find_by_title(title).await? {
                if owner.value != value {
                    return Err(AppError::BadRequest(format!(
                        "Title \"{}\" is already used by level {}",
                        title, owner.value
                    )));
                }
            }
        }

        repo.set_title(value, title).await
    }
}
