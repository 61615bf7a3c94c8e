use super::*;

/// Tests creating a member for a player new to the server.
///
/// Expected: Ok with progress (0, 0)
#[tokio::test]
async fn creates_member_at_level_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let server = factory::create_server(db).await?;
    let player_id = player.discord_id.parse::<u64>().unwrap();
    let server_id = server.discord_id.parse::<u64>().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.get_or_create(player_id, server_id).await?;

    assert_eq!(member.player_id, player_id);
    assert_eq!(member.server_id, server_id);
    assert_eq!(member.progress, Progress::new(0, 0));

    Ok(())
}

/// Tests that an existing member is returned instead of a duplicate.
///
/// Expected: Ok with the existing member's progress
#[tokio::test]
async fn returns_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let server = factory::create_server(db).await?;
    let existing = factory::member::MemberFactory::new(db, &player.discord_id, &server.discord_id)
        .level(4)
        .exp(321)
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let member = repo
        .get_or_create(
            player.discord_id.parse().unwrap(),
            server.discord_id.parse().unwrap(),
        )
        .await?;

    assert_eq!(member.id, existing.id);
    assert_eq!(member.progress, Progress::new(4, 321));

    Ok(())
}
