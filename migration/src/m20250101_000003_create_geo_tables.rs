use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_crawlers::Crawlers;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn count_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .big_integer()
        .not_null()
        .default(0)
        .to_owned()
}

fn time_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(id_column(Countries::Id))
                    .col(ColumnDef::new(Countries::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Countries::Continents).string().not_null().default(""))
                    .col(ColumnDef::new(Countries::CountryShortCode).string().not_null().default(""))
                    .col(ColumnDef::new(Countries::CountryName).string().not_null())
                    .col(ColumnDef::new(Countries::CountryFullName).string().not_null().default(""))
                    .col(count_column(Countries::CurrentConfirmedCount))
                    .col(count_column(Countries::ConfirmedCount))
                    .col(count_column(Countries::SuspectedCount))
                    .col(count_column(Countries::CuredCount))
                    .col(count_column(Countries::DeadCount))
                    .col(time_column(Countries::CreateTime))
                    .col(time_column(Countries::ModifyTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_countries_crawler")
                            .from(Countries::Table, Countries::CrawlerId)
                            .to(Crawlers::Table, Crawlers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_countries_crawler_name")
                    .table(Countries::Table)
                    .col(Countries::CrawlerId)
                    .col(Countries::CountryName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Provinces::Table)
                    .if_not_exists()
                    .col(id_column(Provinces::Id))
                    .col(ColumnDef::new(Provinces::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Provinces::LocationId).integer().not_null().default(0))
                    .col(ColumnDef::new(Provinces::ProvinceName).string().not_null())
                    .col(ColumnDef::new(Provinces::ProvinceShortName).string().not_null())
                    .col(count_column(Provinces::CurrentConfirmedCount))
                    .col(count_column(Provinces::ConfirmedCount))
                    .col(count_column(Provinces::SuspectedCount))
                    .col(count_column(Provinces::CuredCount))
                    .col(count_column(Provinces::DeadCount))
                    .col(ColumnDef::new(Provinces::Comment).text().not_null().default(""))
                    .col(time_column(Provinces::CreateTime))
                    .col(time_column(Provinces::ModifyTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provinces_crawler")
                            .from(Provinces::Table, Provinces::CrawlerId)
                            .to(Crawlers::Table, Crawlers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_provinces_crawler_short_name")
                    .table(Provinces::Table)
                    .col(Provinces::CrawlerId)
                    .col(Provinces::ProvinceShortName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cities::Table)
                    .if_not_exists()
                    .col(id_column(Cities::Id))
                    .col(ColumnDef::new(Cities::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Cities::ProvinceId).integer())
                    .col(ColumnDef::new(Cities::LocationId).integer().not_null().default(0))
                    .col(ColumnDef::new(Cities::ProvinceName).string().not_null().default(""))
                    .col(ColumnDef::new(Cities::ProvinceShortName).string().not_null().default(""))
                    .col(ColumnDef::new(Cities::CityName).string().not_null())
                    .col(count_column(Cities::CurrentConfirmedCount))
                    .col(count_column(Cities::ConfirmedCount))
                    .col(count_column(Cities::SuspectedCount))
                    .col(count_column(Cities::CuredCount))
                    .col(count_column(Cities::DeadCount))
                    .col(time_column(Cities::CreateTime))
                    .col(time_column(Cities::ModifyTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_crawler")
                            .from(Cities::Table, Cities::CrawlerId)
                            .to(Crawlers::Table, Crawlers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_province")
                            .from(Cities::Table, Cities::ProvinceId)
                            .to(Provinces::Table, Provinces::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cities_crawler_name")
                    .table(Cities::Table)
                    .col(Cities::CrawlerId)
                    .col(Cities::CityName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Provinces::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Countries {
    Table,
    Id,
    CrawlerId,
    Continents,
    CountryShortCode,
    CountryName,
    CountryFullName,
    CurrentConfirmedCount,
    ConfirmedCount,
    SuspectedCount,
    CuredCount,
    DeadCount,
    CreateTime,
    ModifyTime,
}

#[derive(DeriveIden)]
enum Provinces {
    Table,
    Id,
    CrawlerId,
    LocationId,
    ProvinceName,
    ProvinceShortName,
    CurrentConfirmedCount,
    ConfirmedCount,
    SuspectedCount,
    CuredCount,
    DeadCount,
    Comment,
    CreateTime,
    ModifyTime,
}

#[derive(DeriveIden)]
enum Cities {
    Table,
    Id,
    CrawlerId,
    ProvinceId,
    LocationId,
    ProvinceName,
    ProvinceShortName,
    CityName,
    CurrentConfirmedCount,
    ConfirmedCount,
    SuspectedCount,
    CuredCount,
    DeadCount,
    CreateTime,
    ModifyTime,
}
