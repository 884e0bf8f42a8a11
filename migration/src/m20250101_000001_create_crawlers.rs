use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per completed crawler run; the highest id is the current run
        manager
            .create_table(
                Table::create()
                    .table(Crawlers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crawlers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Crawlers::CreateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Crawlers::ModifyTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Crawlers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Crawlers {
    Table,
    Id,
    CreateTime,
    ModifyTime,
}
