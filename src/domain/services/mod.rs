// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 快照聚合（snapshot_aggregator）：组装最新批次视图和历史统计列表
/// - 地区查询（geo_lookup_service）：国家、省份、城市的列表、主键和名称查询
pub mod geo_lookup_service;
pub mod snapshot_aggregator;
