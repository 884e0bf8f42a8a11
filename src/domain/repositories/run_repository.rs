// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::run::Run;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 批次仓库特质
///
/// 批次只由外部采集进程写入，这里只提供读取接口。
#[async_trait]
pub trait RunRepository: Send + Sync {
    /// 查找ID最大的批次
    async fn find_latest(&self) -> Result<Option<Run>, RepositoryError>;

    /// 根据ID查找批次
    async fn find_by_id(&self, id: i32) -> Result<Option<Run>, RepositoryError>;

    /// 批量查找批次，结果顺序不作保证
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Run>, RepositoryError>;

    /// 获取当前最新批次
    ///
    /// # 返回值
    ///
    /// * `Ok(Run)` - ID最大的批次
    /// * `Err(RepositoryError::NotFound)` - 还没有任何批次
    async fn latest_run(&self) -> Result<Run, RepositoryError> {
        self.find_latest().await?.ok_or(RepositoryError::NotFound)
    }

    /// 获取指定批次，不存在时返回 `NotFound`
    async fn get_run(&self, id: i32) -> Result<Run, RepositoryError> {
        self.find_by_id(id).await?.ok_or(RepositoryError::NotFound)
    }
}
