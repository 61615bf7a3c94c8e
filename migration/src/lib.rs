pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_player_table;
mod m20240101_000002_create_server_table;
mod m20240101_000003_create_level_table;
mod m20240101_000004_create_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_player_table::Migration),
            Box::new(m20240101_000002_create_server_table::Migration),
            Box::new(m20240101_000003_create_level_table::Migration),
            Box::new(m20240101_000004_create_member_table::Migration),
        ]
    }
}
