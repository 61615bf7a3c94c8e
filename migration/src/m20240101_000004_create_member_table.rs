use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_player_table::Player;
use super::m20240101_000002_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(pk_auto(Member::Id))
                    .col(string(Member::PlayerId))
                    .col(string(Member::ServerId))
                    .col(integer(Member::Level).default(0))
                    .col(big_integer(Member::Exp).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_player_id")
                            .from(Member::Table, Member::PlayerId)
                            .to(Player::Table, Player::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_server_id")
                            .from(Member::Table, Member::ServerId)
                            .to(Server::Table, Server::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_member_player_server_unique")
                            .col(Member::PlayerId)
                            .col(Member::ServerId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_server_ranking")
                    .table(Member::Table)
                    .col(Member::ServerId)
                    .col(Member::Level)
                    .col(Member::Exp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    PlayerId,
    ServerId,
    Level,
    Exp,
}
