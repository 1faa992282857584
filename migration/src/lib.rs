pub use sea_orm_migration::prelude::*;

mod m20231017_000001_create_games;
mod m20231017_000002_create_subscribes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231017_000001_create_games::Migration),
            Box::new(m20231017_000002_create_subscribes::Migration),
        ]
    }
}
