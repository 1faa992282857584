use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(crate) enum Games {
    Table,
    Id,
    Name,
    Price,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Games::Price).double().not_null())
                    .to_owned(),
            )
            .await?;

        // range filters on /games/ hit this column
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_games_price")
                    .table(Games::Table)
                    .col(Games::Price)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Games::Table).to_owned())
            .await
    }
}
