use super::*;

/// Tests memoizing a level that does not exist yet.
///
/// Expected: Ok with the level cost taken from the threshold curve
#[tokio::test]
async fn creates_missing_level_from_curve() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRepository::new(db);
    let level = repo.get_or_create(91).await?;

    assert_eq!(level.value, 91);
    assert_eq!(level.exp, threshold(91)?);
    assert_eq!(level.title, None);
    assert!(repo.get_by_value(91).await?.is_some());

    Ok(())
}

/// Tests that an existing level row is returned unchanged.
///
/// Expected: Ok with the stored title and cost
#[tokio::test]
async fn returns_existing_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::level::LevelFactory::new(db, 1)
        .title("Recruit")
        .build()
        .await?;

    let repo = LevelRepository::new(db);
    let level = repo.get_or_create(1).await?;

    assert_eq!(level.title.as_deref(), Some("Recruit"));
    assert_eq!(level.exp, 1000);

    Ok(())
}

/// Tests requesting level 0.
///
/// Expected: Err(LevelingErr) and nothing stored
#[tokio::test]
async fn rejects_level_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRepository::new(db);
    let result = repo.get_or_create(0).await;

    assert!(matches!(result, Err(AppError::LevelingErr(_))));
    assert!(repo.get_by_value(0).await?.is_none());

    Ok(())
}
