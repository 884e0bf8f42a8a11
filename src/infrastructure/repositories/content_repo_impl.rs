// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::content::{
    Article, GoodsGuide, Notice, Recommend, Rumor, Timeline, Wiki,
};
use crate::domain::repositories::content_repository::ContentRepository;
use crate::domain::repositories::run_repository::RepositoryError;
use crate::infrastructure::database::entities::{
    goods_guide, notice, recommend, rumor, timeline, who_article, wiki,
};
use async_trait::async_trait;
use sea_orm::*;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::warn;

/// 批次附属内容仓库实现
///
/// 所有列表均按主键升序返回
pub struct ContentRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// JSON 列解析为字符串数组
///
/// 空值或不是字符串数组的内容都退化为空数组，不影响整个视图的构建。
fn json_strings(value: JsonValue, field: &str, run_id: i32) -> Vec<String> {
    if value.is_null() {
        return Vec::new();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("Ignoring malformed {} of run {}: {}", field, run_id, e);
        Vec::new()
    })
}

#[async_trait]
impl ContentRepository for ContentRepositoryImpl {
    async fn find_notice(&self, run_id: i32) -> Result<Option<Notice>, RepositoryError> {
        let model = notice::Entity::find()
            .filter(notice::Column::CrawlerId.eq(run_id))
            .order_by_asc(notice::Column::Id)
            .one(self.db.as_ref())
            .await?;

        match model {
            Some(m) => Ok(Some(Notice {
                remarks: json_strings(m.remarks, "notice remarks", run_id),
                notes: json_strings(m.notes, "notice notes", run_id),
                general_remark: m.general_remark,
            })),
            None => Ok(None),
        }
    }

    async fn find_article(&self, run_id: i32) -> Result<Option<Article>, RepositoryError> {
        let model = who_article::Entity::find()
            .filter(who_article::Column::CrawlerId.eq(run_id))
            .order_by_asc(who_article::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(|m| Article {
            title: m.title,
            link_url: m.link_url,
            img_url: m.img_url,
        }))
    }

    async fn list_recommends(&self, run_id: i32) -> Result<Vec<Recommend>, RepositoryError> {
        let models = recommend::Entity::find()
            .filter(recommend::Column::CrawlerId.eq(run_id))
            .order_by_asc(recommend::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Recommend {
                title: m.title,
                link_url: m.link_url,
                img_url: m.img_url,
                content_type: m.content_type,
                record_status: m.record_status,
                country_type: m.country_type,
            })
            .collect())
    }

    async fn list_timelines(&self, run_id: i32) -> Result<Vec<Timeline>, RepositoryError> {
        let models = timeline::Entity::find()
            .filter(timeline::Column::CrawlerId.eq(run_id))
            .order_by_asc(timeline::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Timeline {
                pub_date: m.pub_date.into(),
                title: m.title,
                summary: m.summary,
                info_source: m.info_source,
                source_url: m.source_url,
            })
            .collect())
    }

    async fn list_wikis(&self, run_id: i32) -> Result<Vec<Wiki>, RepositoryError> {
        let models = wiki::Entity::find()
            .filter(wiki::Column::CrawlerId.eq(run_id))
            .order_by_asc(wiki::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Wiki {
                title: m.title,
                link_url: m.link_url,
                img_url: m.img_url,
                description: m.description,
            })
            .collect())
    }

    async fn list_goods_guides(&self, run_id: i32) -> Result<Vec<GoodsGuide>, RepositoryError> {
        let models = goods_guide::Entity::find()
            .filter(goods_guide::Column::CrawlerId.eq(run_id))
            .order_by_asc(goods_guide::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| GoodsGuide {
                title: m.title,
                category_name: m.category_name,
                content_img_urls: json_strings(
                    m.content_img_urls,
                    "goods guide images",
                    run_id,
                ),
            })
            .collect())
    }

    async fn list_rumors(&self, run_id: i32) -> Result<Vec<Rumor>, RepositoryError> {
        let models = rumor::Entity::find()
            .filter(rumor::Column::CrawlerId.eq(run_id))
            .order_by_asc(rumor::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| Rumor {
                title: m.title,
                main_summary: m.main_summary,
                summary: m.summary,
                body: m.body,
                source_url: m.source_url,
                score: m.score,
                rumor_type: m.rumor_type,
            })
            .collect())
    }
}
