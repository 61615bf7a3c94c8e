use super::*;

/// Tests titling a level that was not memoized yet.
///
/// Expected: Ok with the level created and titled
#[tokio::test]
async fn titles_new_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRepository::new(db);
    let level = repo.set_title(10, Some("Veteran".to_string())).await?;

    assert_eq!(level.value, 10);
    assert_eq!(level.title.as_deref(), Some("Veteran"));
    assert_eq!(level.exp, threshold(10)?);

    Ok(())
}

/// Tests that titles must be unique across levels.
///
/// Expected: Err(DbErr) for the second level
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRepository::new(db);
    repo.set_title(10, Some("Veteran".to_string())).await?;
    let result = repo.set_title(11, Some("Veteran".to_string())).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
