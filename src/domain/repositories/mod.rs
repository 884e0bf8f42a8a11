// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 所有接口都是只读的，数据由外部采集进程写入。
///
/// 包含的仓库接口：
/// - 批次仓库（run_repository）：定位最新批次
/// - 统计仓库（statistics_repository）：按批次读取统计快照
/// - 地区仓库（geo_repository）：国家、省份、城市数据
/// - 内容仓库（content_repository）：公告、文章及各类附属列表
pub mod content_repository;
pub mod geo_repository;
pub mod run_repository;
pub mod statistics_repository;
