// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::run_repository::RepositoryError;
use crate::domain::models::statistics::StatisticsSnapshot;
use async_trait::async_trait;

/// 统计快照仓库特质
///
/// 两个查询都按快照ID升序返回。
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    /// 查找某个批次的全部快照
    async fn find_by_run(&self, run_id: i32) -> Result<Vec<StatisticsSnapshot>, RepositoryError>;

    /// 查找全部批次的全部快照
    async fn find_all(&self) -> Result<Vec<StatisticsSnapshot>, RepositoryError>;
}
