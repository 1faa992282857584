use sea_orm_migration::prelude::*;

use crate::m20231017_000001_create_games::Games;

/// Fixed default written into the schema for `subscribes.datetime_finished`.
/// Keep in sync with `entities::subscribes::DEFAULT_DATETIME_FINISHED`.
const DATETIME_FINISHED_DEFAULT: &str = "2023-11-16";

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Subscribes {
    Table,
    Id,
    IsActive,
    DatetimeFinished,
    GameId,
    UserId,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Both foreign keys cascade: a subscription never outlives its game or user.
        manager
            .create_table(
                Table::create()
                    .table(Subscribes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subscribes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subscribes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Subscribes::DatetimeFinished)
                            .date()
                            .not_null()
                            .default(DATETIME_FINISHED_DEFAULT),
                    )
                    .col(ColumnDef::new(Subscribes::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Subscribes::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscribes_game")
                            .from(Subscribes::Table, Subscribes::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscribes_user")
                            .from(Subscribes::Table, Subscribes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subscribes_game_id")
                    .table(Subscribes::Table)
                    .col(Subscribes::GameId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_subscribes_user_id")
                    .table(Subscribes::Table)
                    .col(Subscribes::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 先删引用方
        manager
            .drop_table(Table::drop().if_exists().table(Subscribes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().if_exists().table(Users::Table).to_owned())
            .await
    }
}
