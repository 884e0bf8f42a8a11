// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::run_repository::RepositoryError;
use crate::domain::models::content::{
    Article, GoodsGuide, Notice, Recommend, Rumor, Timeline, Wiki,
};
use async_trait::async_trait;

/// 附属内容仓库特质
///
/// 提供挂在批次下的公告、文章和各类列表内容。
/// 列表按存储顺序（主键升序）返回，可以为空。
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// 批次公告，至多一条
    async fn find_notice(&self, run_id: i32) -> Result<Option<Notice>, RepositoryError>;

    /// 批次 WHO 文章，至多一篇
    async fn find_article(&self, run_id: i32) -> Result<Option<Article>, RepositoryError>;

    /// 推荐内容
    async fn list_recommends(&self, run_id: i32) -> Result<Vec<Recommend>, RepositoryError>;

    /// 时间线
    async fn list_timelines(&self, run_id: i32) -> Result<Vec<Timeline>, RepositoryError>;

    /// 防护知识
    async fn list_wikis(&self, run_id: i32) -> Result<Vec<Wiki>, RepositoryError>;

    /// 防护用品指南
    async fn list_goods_guides(&self, run_id: i32) -> Result<Vec<GoodsGuide>, RepositoryError>;

    /// 辟谣信息
    async fn list_rumors(&self, run_id: i32) -> Result<Vec<Rumor>, RepositoryError>;
}
