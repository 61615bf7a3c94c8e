use super::*;

/// Tests setting and then clearing the levels channel.
///
/// Expected: Ok with channel stored, then removed
#[tokio::test]
async fn sets_and_clears_levels_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Server)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let discord_id = server.discord_id.parse::<u64>().unwrap();

    let repo = ServerRepository::new(db);

    repo.set_levels_channel(discord_id, Some(367057131750293514))
        .await?;
    let server = repo.find_by_discord_id(discord_id).await?.unwrap();
    assert_eq!(server.levels_channel_id, Some(367057131750293514));

    repo.set_levels_channel(discord_id, None).await?;
    let server = repo.find_by_discord_id(discord_id).await?.unwrap();
    assert_eq!(server.levels_channel_id, None);

    Ok(())
}
