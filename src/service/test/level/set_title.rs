use super::*;

/// Tests renaming a level to its own current title.
///
/// Expected: Ok with the title kept
#[tokio::test]
async fn keeps_own_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::level::LevelFactory::new(db, 3)
        .title("Squire")
        .build()
        .await?;

    let level = LevelService::new(db)
        .set_title(3, Some("Squire".to_string()))
        .await?;

    assert_eq!(level.title.as_deref(), Some("Squire"));

    Ok(())
}

/// Tests taking a title already used by another level.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_title_of_other_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::level::LevelFactory::new(db, 3)
        .title("Squire")
        .build()
        .await?;

    let result = LevelService::new(db)
        .set_title(4, Some("Squire".to_string()))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests clearing a title.
///
/// Expected: Ok with no title
#[tokio::test]
async fn clears_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::level::LevelFactory::new(db, 3)
        .title("Squire")
        .build()
        .await?;

    let level = LevelService::new(db).set_title(3, None).await?;

    assert_eq!(level.title, None);

    Ok(())
}
