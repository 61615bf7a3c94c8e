use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use super::*;

/// Tests bulk memoization filling only the gaps.
///
/// Expected: Ok with missing levels inserted and existing ones kept
#[tokio::test]
async fn fills_missing_levels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::level::LevelFactory::new(db, 2)
        .exp(threshold(2)?)
        .title("Squire")
        .build()
        .await?;

    let repo = LevelRepository::new(db);
    let inserted = repo.ensure_up_to(5).await?;
    assert_eq!(inserted, 4);

    let levels = entity::prelude::Level::find()
        .order_by_asc(entity::level::Column::Value)
        .all(db)
        .await?;
    let values: Vec<i32> = levels.iter().map(|l| l.value).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
    assert_eq!(levels[1].title.as_deref(), Some("Squire"));

    for level in &levels {
        assert_eq!(level.exp, threshold(level.value)?);
    }

    Ok(())
}

/// Tests that a second call is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRepository::new(db);
    repo.ensure_up_to(3).await?;

    assert_eq!(repo.ensure_up_to(3).await?, 0);
    assert_eq!(repo.ensure_up_to(0).await?, 0);

    Ok(())
}

/// Tests memoizing more levels than fit in a single INSERT statement.
///
/// Expected: Ok with every level stored and a gap left by a titled level filled
#[tokio::test]
async fn memoizes_large_range_in_batches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Level)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LevelRepository::new(db);
    repo.set_title(5_000, Some("Halfway".to_string())).await?;

    let inserted = repo.ensure_up_to(12_000).await?;
    assert_eq!(inserted, 11_999);

    let stored = entity::prelude::Level::find().count(db).await?;
    assert_eq!(stored, 12_000);

    let last = repo.get_by_value(12_000).await?.unwrap();
    assert_eq!(last.exp, threshold(12_000)?);

    let titled = repo.get_by_value(5_000).await?.unwrap();
    assert_eq!(titled.title.as_deref(), Some("Halfway"));

    assert_eq!(repo.ensure_up_to(12_000).await?, 0);

    Ok(())
}
