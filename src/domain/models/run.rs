// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 爬虫运行批次
///
/// 外部采集进程每完成一次抓取就写入一条记录，ID 单调递增。
/// 其余所有统计、地区和资讯数据都挂在某一个批次下面，
/// 当前批次永远是 ID 最大的那一条。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    /// 批次ID
    pub id: i32,
    /// 创建时间
    pub create_time: DateTime<Utc>,
    /// 最后修改时间
    pub modify_time: DateTime<Utc>,
}
