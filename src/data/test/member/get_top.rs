use super::*;

/// Tests leaderboard ordering by level then experience.
///
/// Expected: Ok with members ordered and limited, other servers excluded
#[tokio::test]
async fn orders_by_level_then_experience() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_leveling_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other_server = factory::create_server(db).await?;

    for (name, level, exp) in [("low", 1, 900), ("high", 3, 10), ("mid", 1, 950), ("zero", 0, 0)] {
        let player = factory::player::PlayerFactory::new(db)
            .name(name)
            .build()
            .await?;
        factory::member::MemberFactory::new(db, &player.discord_id, &server.discord_id)
            .level(level)
            .exp(exp)
            .build()
            .await?;
    }

    let outsider = factory::create_player(db).await?;
    factory::member::MemberFactory::new(db, &outsider.discord_id, &other_server.discord_id)
        .level(50)
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let top = repo
        .get_top(server.discord_id.parse().unwrap(), 3)
        .await?;

    let ranked: Vec<&str> = top.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(ranked, vec!["high", "mid", "low"]);
    assert_eq!(top[0].member.progress, Progress::new(3, 10));

    Ok(())
}
