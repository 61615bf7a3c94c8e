use super::*;

/// Tests that the requested count is clamped.
///
/// Expected: Ok with at least one and at most 25 members
#[tokio::test]
async fn clamps_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    for level in 0..30 {
        let player = factory::create_player(db).await?;
        factory::member::MemberFactory::new(db, &player.discord_id, &server.discord_id)
            .level(level)
            .build()
            .await?;
    }

    let server_id = server.discord_id.parse().unwrap();
    let service = RankingService::new(db);

    let top = service.top(server_id, 100).await?;
    assert_eq!(top.len(), 25);
    assert_eq!(top[0].member.progress, Progress::new(29, 0));

    let top = service.top(server_id, 0).await?;
    assert_eq!(top.len(), 1);

    Ok(())
}

/// Tests the leaderboard of a server without members.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_server_has_empty_leaderboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let top = RankingService::new(db).top(123, 5).await?;
    assert!(top.is_empty());

    Ok(())
}
