use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_crawlers::Crawlers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Statistics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Statistics::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Statistics::CountryType).integer().not_null())
                    .col(
                        ColumnDef::new(Statistics::CurrentConfirmedCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Statistics::ConfirmedCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Statistics::SuspectedCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Statistics::SeriousCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Statistics::CuredCount).big_integer().not_null().default(0))
                    .col(ColumnDef::new(Statistics::DeadCount).big_integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistics_crawler")
                            .from(Statistics::Table, Statistics::CrawlerId)
                            .to(Crawlers::Table, Crawlers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_statistics_crawler_type")
                    .table(Statistics::Table)
                    .col(Statistics::CrawlerId)
                    .col(Statistics::CountryType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Statistics {
    Table,
    Id,
    CrawlerId,
    CountryType,
    CurrentConfirmedCount,
    ConfirmedCount,
    SuspectedCount,
    SeriousCount,
    CuredCount,
    DeadCount,
}
