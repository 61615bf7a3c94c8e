use super::*;

/// Tests configuring the channel of a server the bot has not stored yet.
///
/// Expected: Ok with the server created and the channel set
#[tokio::test]
async fn creates_server_and_sets_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ServerService::new(db);
    let server = service
        .set_levels_channel(
            UpsertServerParam {
                discord_id: 500,
                name: "Hellshade".to_string(),
            },
            Some(42),
        )
        .await?;

    assert_eq!(server.levels_channel_id, Some(42));
    assert_eq!(service.get_with_levels_channel().await?.len(), 1);

    Ok(())
}

/// Tests clearing the channel.
///
/// Expected: Ok with no channel and the server left out of announcement targets
#[tokio::test]
async fn clears_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .discord_id("500")
        .levels_channel_id(Some("42"))
        .build()
        .await?;

    let service = ServerService::new(db);
    let server = service
        .set_levels_channel(
            UpsertServerParam {
                discord_id: 500,
                name: "Hellshade".to_string(),
            },
            None,
        )
        .await?;

    assert_eq!(server.levels_channel_id, None);
    assert!(service.get_with_levels_channel().await?.is_empty());

    Ok(())
}
