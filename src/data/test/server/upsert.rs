use super::*;

/// Tests creating a new server.
///
/// Expected: Ok with zero experience and no levels channel
#[tokio::test]
async fn creates_new_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let server = repo
        .upsert(UpsertServerParam {
            discord_id: 987654321,
            name: "Hellshade".to_string(),
        })
        .await?;

    assert_eq!(server.discord_id, 987654321);
    assert_eq!(server.name, "Hellshade");
    assert_eq!(server.server_exp, 0);
    assert_eq!(server.levels_channel_id, None);

    Ok(())
}

/// Tests that upserting a known server keeps its experience and channel.
///
/// Expected: Ok with name updated and other fields preserved
#[tokio::test]
async fn updates_name_and_preserves_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server::ServerFactory::new(db)
        .discord_id("987654321")
        .name("Old")
        .server_exp(5000)
        .levels_channel_id(Some("111"))
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let server = repo
        .upsert(UpsertServerParam {
            discord_id: 987654321,
            name: "New".to_string(),
        })
        .await?;

    assert_eq!(server.name, "New");
    assert_eq!(server.server_exp, 5000);
    assert_eq!(server.levels_channel_id, Some(111));

    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
