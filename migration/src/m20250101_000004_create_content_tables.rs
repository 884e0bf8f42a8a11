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

fn crawler_fk<T, C>(name: &str, table: T, column: C) -> ForeignKeyCreateStatement
where
    T: IntoTableRef,
    C: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(Crawlers::Table, Crawlers::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // At most one notice and one WHO article per run
        manager
            .create_table(
                Table::create()
                    .table(Notices::Table)
                    .if_not_exists()
                    .col(id_column(Notices::Id))
                    .col(ColumnDef::new(Notices::CrawlerId).integer().not_null().unique_key())
                    .col(ColumnDef::new(Notices::Remarks).json().not_null())
                    .col(ColumnDef::new(Notices::Notes).json().not_null())
                    .col(ColumnDef::new(Notices::GeneralRemark).text().not_null().default(""))
                    .foreign_key(&mut crawler_fk(
                        "fk_notices_crawler",
                        Notices::Table,
                        Notices::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WhoArticles::Table)
                    .if_not_exists()
                    .col(id_column(WhoArticles::Id))
                    .col(
                        ColumnDef::new(WhoArticles::CrawlerId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(WhoArticles::Title).string().not_null())
                    .col(ColumnDef::new(WhoArticles::LinkUrl).string().not_null())
                    .col(ColumnDef::new(WhoArticles::ImgUrl).string().not_null().default(""))
                    .foreign_key(&mut crawler_fk(
                        "fk_who_articles_crawler",
                        WhoArticles::Table,
                        WhoArticles::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Recommends::Table)
                    .if_not_exists()
                    .col(id_column(Recommends::Id))
                    .col(ColumnDef::new(Recommends::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Recommends::Title).string().not_null())
                    .col(ColumnDef::new(Recommends::LinkUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Recommends::ImgUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Recommends::ContentType).integer().not_null().default(0))
                    .col(ColumnDef::new(Recommends::RecordStatus).integer().not_null().default(0))
                    .col(ColumnDef::new(Recommends::CountryType).integer().not_null().default(0))
                    .foreign_key(&mut crawler_fk(
                        "fk_recommends_crawler",
                        Recommends::Table,
                        Recommends::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Timelines::Table)
                    .if_not_exists()
                    .col(id_column(Timelines::Id))
                    .col(ColumnDef::new(Timelines::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Timelines::PubDate).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Timelines::Title).string().not_null())
                    .col(ColumnDef::new(Timelines::Summary).text().not_null().default(""))
                    .col(ColumnDef::new(Timelines::InfoSource).string().not_null().default(""))
                    .col(ColumnDef::new(Timelines::SourceUrl).string().not_null().default(""))
                    .foreign_key(&mut crawler_fk(
                        "fk_timelines_crawler",
                        Timelines::Table,
                        Timelines::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Wikis::Table)
                    .if_not_exists()
                    .col(id_column(Wikis::Id))
                    .col(ColumnDef::new(Wikis::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Wikis::Title).string().not_null())
                    .col(ColumnDef::new(Wikis::LinkUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Wikis::ImgUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Wikis::Description).text().not_null().default(""))
                    .foreign_key(&mut crawler_fk(
                        "fk_wikis_crawler",
                        Wikis::Table,
                        Wikis::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GoodsGuides::Table)
                    .if_not_exists()
                    .col(id_column(GoodsGuides::Id))
                    .col(ColumnDef::new(GoodsGuides::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(GoodsGuides::Title).string().not_null())
                    .col(ColumnDef::new(GoodsGuides::CategoryName).string().not_null().default(""))
                    .col(ColumnDef::new(GoodsGuides::ContentImgUrls).json().not_null())
                    .foreign_key(&mut crawler_fk(
                        "fk_goods_guides_crawler",
                        GoodsGuides::Table,
                        GoodsGuides::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rumors::Table)
                    .if_not_exists()
                    .col(id_column(Rumors::Id))
                    .col(ColumnDef::new(Rumors::CrawlerId).integer().not_null())
                    .col(ColumnDef::new(Rumors::Title).string().not_null())
                    .col(ColumnDef::new(Rumors::MainSummary).string().not_null().default(""))
                    .col(ColumnDef::new(Rumors::Summary).text().not_null().default(""))
                    .col(ColumnDef::new(Rumors::Body).text().not_null().default(""))
                    .col(ColumnDef::new(Rumors::SourceUrl).string().not_null().default(""))
                    .col(ColumnDef::new(Rumors::Score).integer().not_null().default(0))
                    .col(ColumnDef::new(Rumors::RumorType).integer().not_null().default(0))
                    .foreign_key(&mut crawler_fk(
                        "fk_rumors_crawler",
                        Rumors::Table,
                        Rumors::CrawlerId,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rumors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GoodsGuides::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Wikis::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Timelines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Recommends::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WhoArticles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notices {
    Table,
    Id,
    CrawlerId,
    Remarks,
    Notes,
    GeneralRemark,
}

#[derive(DeriveIden)]
enum WhoArticles {
    Table,
    Id,
    CrawlerId,
    Title,
    LinkUrl,
    ImgUrl,
}

#[derive(DeriveIden)]
enum Recommends {
    Table,
    Id,
    CrawlerId,
    Title,
    LinkUrl,
    ImgUrl,
    ContentType,
    RecordStatus,
    CountryType,
}

#[derive(DeriveIden)]
enum Timelines {
    Table,
    Id,
    CrawlerId,
    PubDate,
    Title,
    Summary,
    InfoSource,
    SourceUrl,
}

#[derive(DeriveIden)]
enum Wikis {
    Table,
    Id,
    CrawlerId,
    Title,
    LinkUrl,
    ImgUrl,
    Description,
}

#[derive(DeriveIden)]
enum GoodsGuides {
    Table,
    Id,
    CrawlerId,
    Title,
    CategoryName,
    ContentImgUrls,
}

#[derive(DeriveIden)]
enum Rumors {
    Table,
    Id,
    CrawlerId,
    Title,
    MainSummary,
    Summary,
    Body,
    SourceUrl,
    Score,
    RumorType,
}
