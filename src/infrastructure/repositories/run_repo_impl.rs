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

use crate::domain::models::run::Run;
use crate::domain::repositories::run_repository::{RepositoryError, RunRepository};
use crate::infrastructure::database::entities::crawler as crawler_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 单条 `IN (...)` 查询携带的最大ID数，须低于数据库的绑定参数上限
const IDS_PER_QUERY: usize = 1000;

/// 批次仓库实现
pub struct RunRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RunRepositoryImpl {
    /// 创建新的批次仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<crawler_entity::Model> for Run {
    fn from(m: crawler_entity::Model) -> Self {
        Run {
            id: m.id,
            create_time: m.create_time.into(),
            modify_time: m.modify_time.into(),
        }
    }
}

#[async_trait]
impl RunRepository for RunRepositoryImpl {
    async fn find_latest(&self) -> Result<Option<Run>, RepositoryError> {
        let model = crawler_entity::Entity::find()
            .order_by_desc(crawler_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Run>, RepositoryError> {
        let model = crawler_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Run>, RepositoryError> {
        let mut runs = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(IDS_PER_QUERY) {
            let models = crawler_entity::Entity::find()
                .filter(crawler_entity::Column::Id.is_in(chunk.iter().copied()))
                .all(self.db.as_ref())
                .await?;
            runs.extend(models.into_iter().map(Run::from));
        }

        Ok(runs)
    }
}
