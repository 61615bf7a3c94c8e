use super::*;

/// Tests storing new progress.
///
/// Expected: Ok with level and experience replaced
#[tokio::test]
async fn stores_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, member) = factory::create_member_with_dependencies(db).await?;

    let repo = MemberRepository::new(db);
    let updated = repo
        .update_progress(member.id, Progress::new(2, 498))
        .await?;

    assert_eq!(updated.progress, Progress::new(2, 498));

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let result = repo.update_progress(404, Progress::new(1, 0)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
