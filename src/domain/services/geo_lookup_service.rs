// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::debug;

use crate::domain::models::geo::GeoRecord;
use crate::domain::repositories::geo_repository::GeoRepository;
use crate::domain::repositories::run_repository::{RepositoryError, RunRepository};

/// 地区查询服务
///
/// 国家、省份、城市共用同一套查询逻辑：
/// - 列表和按名称查询限定在最新批次内
/// - 按主键查询不限批次，历史记录依然可达
pub struct GeoLookupService<RR, GR> {
    run_repo: Arc<RR>,
    geo_repo: Arc<GR>,
}

impl<RR, GR> GeoLookupService<RR, GR>
where
    RR: RunRepository + 'static,
    GR: GeoRepository + 'static,
{
    pub fn new(run_repo: Arc<RR>, geo_repo: Arc<GR>) -> Self {
        Self { run_repo, geo_repo }
    }

    /// 列出最新批次下满足过滤条件的记录
    pub async fn list_for_latest_run(
        &self,
        filter: &GR::Filter,
    ) -> Result<Vec<GR::Record>, RepositoryError> {
        let run = self.run_repo.latest_run().await?;
        let records = self.geo_repo.list_by_run(run.id, filter).await?;
        debug!("Listed {} geo records for run {}", records.len(), run.id);
        Ok(records)
    }

    /// 按主键查找
    pub async fn get_by_id(&self, id: i32) -> Result<GR::Record, RepositoryError> {
        self.geo_repo
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// 在最新批次内按名称查找
    pub async fn get_by_name(&self, name: &str) -> Result<GR::Record, RepositoryError> {
        let run = self.run_repo.latest_run().await?;
        let record = self
            .geo_repo
            .find_by_name(run.id, name)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        debug!(
            "Resolved '{}' to record {} in run {}",
            record.natural_key(),
            record.id(),
            record.run_id()
        );
        Ok(record)
    }
}
