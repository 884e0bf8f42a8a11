// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 批次（run）：一次完整的外部采集运行
/// - 统计（statistics）：按范围划分的病例计数快照
/// - 地区（geo）：国家、省份、城市数据
/// - 资讯（content）：公告、文章、推荐、时间线等附属内容
/// - 聚合视图（snapshot）：对外输出的组合结果
pub mod content;
pub mod geo;
pub mod run;
pub mod snapshot;
pub mod statistics;
