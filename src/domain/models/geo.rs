// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 地区记录的公共特征
///
/// 国家、省份、城市三类记录都属于某个批次，并在批次内以名称作为自然键。
pub trait GeoRecord {
    /// 记录种类名，用于缓存键和指标标签
    const KIND: &'static str;

    /// 主键
    fn id(&self) -> i32;
    /// 所属批次ID
    fn run_id(&self) -> i32;
    /// 自然键（国家名、省份简称或城市名）
    fn natural_key(&self) -> &str;
}

/// 国家数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    #[serde(skip)]
    pub run_id: i32,
    /// 所属大洲
    pub continents: String,
    /// 国家代码
    pub country_short_code: String,
    /// 国家名
    pub country_name: String,
    /// 国家全称
    pub country_full_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub suspected_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    pub create_time: DateTime<Utc>,
    pub modify_time: DateTime<Utc>,
}

/// 省份数据，附带同一批次下属于该省的城市
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: i32,
    #[serde(skip)]
    pub run_id: i32,
    pub location_id: i32,
    /// 省份全称
    pub province_name: String,
    /// 省份简称
    pub province_short_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub suspected_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    /// 备注
    pub comment: String,
    pub create_time: DateTime<Utc>,
    pub modify_time: DateTime<Utc>,
    /// 下属城市
    #[serde(default)]
    pub cities: Vec<City>,
}

/// 城市数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i32,
    #[serde(skip)]
    pub run_id: i32,
    #[serde(skip)]
    pub province_id: Option<i32>,
    pub location_id: i32,
    pub province_name: String,
    pub province_short_name: String,
    /// 城市名
    pub city_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub suspected_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    pub create_time: DateTime<Utc>,
    pub modify_time: DateTime<Utc>,
}

impl GeoRecord for Country {
    const KIND: &'static str = "country";

    fn id(&self) -> i32 {
        self.id
    }

    fn run_id(&self) -> i32 {
        self.run_id
    }

    fn natural_key(&self) -> &str {
        &self.country_name
    }
}

impl GeoRecord for Province {
    const KIND: &'static str = "province";

    fn id(&self) -> i32 {
        self.id
    }

    fn run_id(&self) -> i32 {
        self.run_id
    }

    fn natural_key(&self) -> &str {
        &self.province_short_name
    }
}

impl GeoRecord for City {
    const KIND: &'static str = "city";

    fn id(&self) -> i32 {
        self.id
    }

    fn run_id(&self) -> i32 {
        self.run_id
    }

    fn natural_key(&self) -> &str {
        &self.city_name
    }
}
