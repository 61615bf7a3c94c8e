use super::*;

/// Tests creating a new player.
///
/// Expected: Ok with a hidden player carrying the given name
#[tokio::test]
async fn creates_new_hidden_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let player = repo
        .upsert(UpsertPlayerParam {
            discord_id: 123456789,
            name: "Moonman".to_string(),
        })
        .await?;

    assert_eq!(player.discord_id, 123456789);
    assert_eq!(player.name, "Moonman");
    assert!(player.hidden);

    Ok(())
}

/// Tests that upserting an existing player refreshes the name but keeps visibility.
///
/// Expected: Ok with name updated and hidden flag preserved
#[tokio::test]
async fn updates_name_and_preserves_visibility() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .discord_id("123456789")
        .name("OldName")
        .hidden(false)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .upsert(UpsertPlayerParam {
            discord_id: 123456789,
            name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(player.name, "NewName");
    assert!(!player.hidden);

    Ok(())
}
