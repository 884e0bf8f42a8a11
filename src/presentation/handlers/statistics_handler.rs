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

use axum::{extract::Extension, Json};
use std::sync::Arc;

use crate::{
    domain::{
        models::snapshot::{LatestStatistics, StatisticsView},
        repositories::{
            content_repository::ContentRepository, run_repository::RunRepository,
            statistics_repository::StatisticsRepository,
        },
        services::snapshot_aggregator::SnapshotAggregator,
    },
    infrastructure::cache::cache_manager::CacheManager,
    presentation::errors::AppError,
};

const LATEST_ENDPOINT: &str = "latest";
const HISTORY_ENDPOINT: &str = "statistics";

/// 获取最新批次的完整统计视图
pub async fn get_latest<RR, SR, CR>(
    Extension(run_repo): Extension<Arc<RR>>,
    Extension(statistics_repo): Extension<Arc<SR>>,
    Extension(content_repo): Extension<Arc<CR>>,
    Extension(cache): Extension<Arc<CacheManager>>,
) -> Result<Json<LatestStatistics>, AppError>
where
    RR: RunRepository + 'static,
    SR: StatisticsRepository + 'static,
    CR: ContentRepository + 'static,
{
    let aggregator = SnapshotAggregator::new(run_repo, statistics_repo, content_repo);
    let key = CacheManager::generate_cache_key(LATEST_ENDPOINT, &());

    let view = cache
        .cached(LATEST_ENDPOINT, &key, || aggregator.build_latest_view())
        .await?;

    Ok(Json(view))
}

/// 获取全部批次的统计历史，按批次倒序
pub async fn list_history<RR, SR, CR>(
    Extension(run_repo): Extension<Arc<RR>>,
    Extension(statistics_repo): Extension<Arc<SR>>,
    Extension(content_repo): Extension<Arc<CR>>,
    Extension(cache): Extension<Arc<CacheManager>>,
) -> Result<Json<Vec<StatisticsView>>, AppError>
where
    RR: RunRepository + 'static,
    SR: StatisticsRepository + 'static,
    CR: ContentRepository + 'static,
{
    let aggregator = SnapshotAggregator::new(run_repo, statistics_repo, content_repo);
    let key = CacheManager::generate_cache_key(HISTORY_ENDPOINT, &());

    let views = cache
        .cached(HISTORY_ENDPOINT, &key, || aggregator.build_history_list())
        .await?;

    Ok(Json(views))
}
