use super::*;

/// Tests accumulating server experience.
///
/// Expected: Ok with the sum of all grants
#[tokio::test]
async fn accumulates_experience() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::ServerFactory::new(db)
        .server_exp(100)
        .build()
        .await?;
    let discord_id = server.discord_id.parse::<u64>().unwrap();

    let repo = ServerRepository::new(db);
    repo.add_experience(discord_id, 25).await?;
    let server = repo.add_experience(discord_id, 10).await?;

    assert_eq!(server.server_exp, 135);

    Ok(())
}

/// Tests adding experience to an unknown server.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let result = repo.add_experience(1, 25).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
