// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层接口的技术实现，包括数据库访问、响应缓存和指标导出。
///
/// 包含的子模块：
/// - 缓存（cache）：内存与 Redis 两种响应缓存
/// - 数据库（database）：数据库连接和实体映射
/// - 指标（metrics）：Prometheus 指标
/// - 仓库实现（repositories）：领域仓库接口的 SeaORM 实现
pub mod cache;
pub mod database;
pub mod metrics;
pub mod repositories;
