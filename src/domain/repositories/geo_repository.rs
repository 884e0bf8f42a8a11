// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::run_repository::RepositoryError;
use crate::domain::models::geo::GeoRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 国家列表过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryFilter {
    /// 大洲，精确匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continents: Option<String>,
    /// 国家代码，精确匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_short_code: Option<String>,
    /// 国家名，包含匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}

/// 省份列表过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceFilter {
    /// 省份全称，包含匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_name: Option<String>,
    /// 省份简称，精确匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_short_name: Option<String>,
}

/// 城市列表过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityFilter {
    /// 所属省份简称，精确匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_short_name: Option<String>,
    /// 城市名，包含匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// 地区仓库特质
///
/// 国家、省份、城市三个仓库形状相同，通过关联类型区分记录和过滤条件。
/// 列表查询按主键升序返回。
#[async_trait]
pub trait GeoRepository: Send + Sync {
    /// 记录类型
    type Record: GeoRecord + Send + Sync;
    /// 列表过滤条件
    type Filter: Send + Sync;

    /// 列出某个批次下满足过滤条件的记录
    async fn list_by_run(
        &self,
        run_id: i32,
        filter: &Self::Filter,
    ) -> Result<Vec<Self::Record>, RepositoryError>;

    /// 根据主键查找，不限批次
    async fn find_by_id(&self, id: i32) -> Result<Option<Self::Record>, RepositoryError>;

    /// 在某个批次内按名称查找
    ///
    /// 同一批次内名称重复时返回主键最小的一条。
    async fn find_by_name(
        &self,
        run_id: i32,
        name: &str,
    ) -> Result<Option<Self::Record>, RepositoryError>;
}
