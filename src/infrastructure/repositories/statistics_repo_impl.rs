// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::statistics::{CaseCounts, Scope, StatisticsSnapshot};
use crate::domain::repositories::run_repository::RepositoryError;
use crate::domain::repositories::statistics_repository::StatisticsRepository;
use crate::infrastructure::database::entities::statistics as statistics_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::warn;

/// 统计快照仓库实现
pub struct StatisticsRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl StatisticsRepositoryImpl {
    /// 创建新的统计快照仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 转换为领域对象，范围编码无法识别的行会被跳过
    fn to_snapshot(m: statistics_entity::Model) -> Option<StatisticsSnapshot> {
        let Some(scope) = Scope::from_code(m.country_type) else {
            warn!(
                "Skipping statistics row {} of run {} with unknown country type {}",
                m.id, m.crawler_id, m.country_type
            );
            return None;
        };

        Some(StatisticsSnapshot {
            id: m.id,
            run_id: m.crawler_id,
            scope,
            counts: CaseCounts {
                current_confirmed_count: m.current_confirmed_count,
                confirmed_count: m.confirmed_count,
                suspected_count: m.suspected_count,
                serious_count: m.serious_count,
                cured_count: m.cured_count,
                dead_count: m.dead_count,
            },
        })
    }
}

#[async_trait]
impl StatisticsRepository for StatisticsRepositoryImpl {
    async fn find_by_run(&self, run_id: i32) -> Result<Vec<StatisticsSnapshot>, RepositoryError> {
        let models = statistics_entity::Entity::find()
            .filter(statistics_entity::Column::CrawlerId.eq(run_id))
            .order_by_asc(statistics_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().filter_map(Self::to_snapshot).collect())
    }

    async fn find_all(&self) -> Result<Vec<StatisticsSnapshot>, RepositoryError> {
        let models = statistics_entity::Entity::find()
            .order_by_asc(statistics_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().filter_map(Self::to_snapshot).collect())
    }
}
