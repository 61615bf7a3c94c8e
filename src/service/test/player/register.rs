use super::*;

/// Tests registering a player the bot has never seen.
///
/// Expected: Ok with a visible player
#[tokio::test]
async fn creates_visible_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerService::new(db)
        .register(UpsertPlayerParam {
            discord_id: 600,
            name: "Moonman".to_string(),
        })
        .await?;

    assert_eq!(player.discord_id, 600);
    assert!(!player.hidden);

    Ok(())
}

/// Tests registering an existing hidden player.
///
/// Expected: Ok with the player unhidden and renamed
#[tokio::test]
async fn unhides_existing_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .discord_id("600")
        .name("Old")
        .build()
        .await?;

    let player = PlayerService::new(db)
        .register(UpsertPlayerParam {
            discord_id: 600,
            name: "Moonman".to_string(),
        })
        .await?;

    assert_eq!(player.name, "Moonman");
    assert!(!player.hidden);

    Ok(())
}
