// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{Article, GoodsGuide, Recommend, Rumor, Timeline, Wiki};
use super::statistics::ScopedStatistics;

/// 最新批次的聚合视图
///
/// 字段的缺省规则：
/// - 没有快照的统计范围直接省略
/// - 没有公告时 `remarks`、`notes` 为空数组，`generalRemark` 为空字符串
/// - 没有 WHO 文章时 `WHOArticle` 显式为 `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestStatistics {
    #[serde(flatten)]
    pub statistics: ScopedStatistics,
    pub create_time: DateTime<Utc>,
    pub modify_time: DateTime<Utc>,
    pub remarks: Vec<String>,
    pub notes: Vec<String>,
    pub general_remark: String,
    #[serde(rename = "WHOArticle")]
    pub who_article: Option<Article>,
    pub recommends: Vec<Recommend>,
    pub timelines: Vec<Timeline>,
    pub wikis: Vec<Wiki>,
    pub goods_guides: Vec<GoodsGuide>,
    pub rumors: Vec<Rumor>,
}

/// 历史统计列表中的一项，对应一个有统计快照的批次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    #[serde(skip)]
    pub run_id: i32,
    #[serde(flatten)]
    pub statistics: ScopedStatistics,
    pub create_time: DateTime<Utc>,
    pub modify_time: DateTime<Utc>,
}
