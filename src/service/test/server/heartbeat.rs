use super::*;

/// Tests refreshing known and new guilds.
///
/// Expected: Ok with names and last-seen timestamps refreshed
#[tokio::test]
async fn refreshes_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale = factory::server::ServerFactory::new(db)
        .discord_id("500")
        .name("Old")
        .build()
        .await?;

    let service = ServerService::new(db);
    let refreshed = service
        .heartbeat(vec![
            UpsertServerParam {
                discord_id: 500,
                name: "Hellshade".to_string(),
            },
            UpsertServerParam {
                discord_id: 501,
                name: "Second".to_string(),
            },
        ])
        .await?;

    assert_eq!(refreshed, 2);

    let repo = ServerRepository::new(db);
    let server = repo.find_by_discord_id(500).await?.unwrap();
    assert_eq!(server.name, "Hellshade");
    assert!(server.last_seen_at >= stale.last_seen_at);
    assert!(repo.find_by_discord_id(501).await?.is_some());

    Ok(())
}
