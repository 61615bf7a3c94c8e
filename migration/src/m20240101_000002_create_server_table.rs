use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(string(Server::DiscordId).primary_key())
                    .col(string(Server::Name))
                    .col(big_integer(Server::ServerExp).default(0))
                    .col(string_null(Server::LevelsChannelId))
                    .col(
                        timestamp_with_time_zone(Server::LastSeenAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    DiscordId,
    Name,
    ServerExp,
    LevelsChannelId,
    LastSeenAt,
}
