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

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::models::snapshot::{LatestStatistics, StatisticsView};
use crate::domain::models::statistics::ScopedStatistics;
use crate::domain::repositories::content_repository::ContentRepository;
use crate::domain::repositories::run_repository::{RepositoryError, RunRepository};
use crate::domain::repositories::statistics_repository::StatisticsRepository;

/// 快照聚合服务
///
/// 把分别存储的批次、统计快照和附属内容拼装成对外输出的组合视图。
/// 每次调用都重新查询最新批次，不持有任何全局“当前批次”状态。
pub struct SnapshotAggregator<RR, SR, CR> {
    run_repo: Arc<RR>,
    statistics_repo: Arc<SR>,
    content_repo: Arc<CR>,
}

impl<RR, SR, CR> SnapshotAggregator<RR, SR, CR>
where
    RR: RunRepository + 'static,
    SR: StatisticsRepository + 'static,
    CR: ContentRepository + 'static,
{
    pub fn new(run_repo: Arc<RR>, statistics_repo: Arc<SR>, content_repo: Arc<CR>) -> Self {
        Self {
            run_repo,
            statistics_repo,
            content_repo,
        }
    }

    /// 构建最新批次的聚合视图
    ///
    /// 只有“没有任何批次”会返回 `NotFound`；公告、文章和各类列表缺失时
    /// 分别退化为空值、`null` 和空数组。
    pub async fn build_latest_view(&self) -> Result<LatestStatistics, RepositoryError> {
        let run = self.run_repo.latest_run().await?;
        let run_id = run.id;

        let snapshots = self.statistics_repo.find_by_run(run_id).await?;
        let statistics = ScopedStatistics::from_snapshots(&snapshots);

        let content = self.content_repo.as_ref();
        let (notice, who_article, recommends, timelines, wikis, goods_guides, rumors) = tokio::try_join!(
            content.find_notice(run_id),
            content.find_article(run_id),
            content.list_recommends(run_id),
            content.list_timelines(run_id),
            content.list_wikis(run_id),
            content.list_goods_guides(run_id),
            content.list_rumors(run_id),
        )?;
        let notice = notice.unwrap_or_default();

        debug!(
            "Built latest view for run {} ({} snapshots, {} recommends, {} timelines)",
            run_id,
            snapshots.len(),
            recommends.len(),
            timelines.len()
        );

        Ok(LatestStatistics {
            statistics,
            create_time: run.create_time,
            modify_time: run.modify_time,
            remarks: notice.remarks,
            notes: notice.notes,
            general_remark: notice.general_remark,
            who_article,
            recommends,
            timelines,
            wikis,
            goods_guides,
            rumors,
        })
    }

    /// 构建历史统计列表
    ///
    /// 每个至少有一条统计快照的批次对应一项，按批次ID降序排列。
    pub async fn build_history_list(&self) -> Result<Vec<StatisticsView>, RepositoryError> {
        let mut grouped: BTreeMap<i32, ScopedStatistics> = BTreeMap::new();
        for snapshot in self.statistics_repo.find_all().await? {
            grouped.entry(snapshot.run_id).or_default().route(&snapshot);
        }

        let run_ids: Vec<i32> = grouped.keys().copied().collect();
        let runs = self.run_repo.find_by_ids(&run_ids).await?;

        let mut views: Vec<StatisticsView> = runs
            .into_iter()
            .filter_map(|run| {
                grouped.remove(&run.id).map(|statistics| StatisticsView {
                    run_id: run.id,
                    statistics,
                    create_time: run.create_time,
                    modify_time: run.modify_time,
                })
            })
            .collect();
        views.sort_by(|a, b| b.run_id.cmp(&a.run_id));

        debug!("Built history list with {} runs", views.len());
        Ok(views)
    }
}
