// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 统计范围
///
/// 数据库中以整数存储：1 = 全球，2 = 国内，3 = 国外
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scope {
    /// 全球
    Global,
    /// 国内
    Domestic,
    /// 国外
    International,
}

impl Scope {
    /// 存储编码
    pub fn code(self) -> i32 {
        match self {
            Scope::Global => 1,
            Scope::Domestic => 2,
            Scope::International => 3,
        }
    }

    /// 从存储编码解析，未知编码返回 `None`
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Scope::Global),
            2 => Some(Scope::Domestic),
            3 => Some(Scope::International),
            _ => None,
        }
    }
}

/// 病例计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCounts {
    /// 现存确诊
    pub current_confirmed_count: i64,
    /// 累计确诊
    pub confirmed_count: i64,
    /// 疑似
    pub suspected_count: i64,
    /// 重症
    pub serious_count: i64,
    /// 治愈
    pub cured_count: i64,
    /// 死亡
    pub dead_count: i64,
}

/// 某个批次在某个范围下的统计快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    /// 快照ID
    pub id: i32,
    /// 所属批次ID
    pub run_id: i32,
    /// 统计范围
    pub scope: Scope,
    /// 病例计数
    pub counts: CaseCounts,
}

/// 按范围归类后的统计数据
///
/// 没有快照的范围直接省略，而不是填充为零。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_statistics: Option<CaseCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domestic_statistics: Option<CaseCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_statistics: Option<CaseCounts>,
}

impl ScopedStatistics {
    /// 将快照放入与其范围对应的字段
    ///
    /// 同一范围出现多次时后放入的覆盖先放入的，
    /// 调用方按快照ID升序放入即可保证ID最大的快照生效。
    pub fn route(&mut self, snapshot: &StatisticsSnapshot) {
        let slot = match snapshot.scope {
            Scope::Global => &mut self.global_statistics,
            Scope::Domestic => &mut self.domestic_statistics,
            Scope::International => &mut self.international_statistics,
        };
        *slot = Some(snapshot.counts);
    }

    /// 从一组快照构建
    pub fn from_snapshots<'a, I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = &'a StatisticsSnapshot>,
    {
        let mut statistics = Self::default();
        for snapshot in snapshots {
            statistics.route(snapshot);
        }
        statistics
    }

    /// 是否没有任何范围的数据
    pub fn is_empty(&self) -> bool {
        self.global_statistics.is_none()
            && self.domestic_statistics.is_none()
            && self.international_statistics.is_none()
    }
}
