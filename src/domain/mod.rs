// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：批次、统计快照、地区和附属内容
/// - 仓库接口（repositories）：只读的数据访问抽象
/// - 服务（services）：快照聚合和地区查询
///
/// 领域层不依赖于任何具体的存储或传输实现。
pub mod models;
pub mod repositories;
pub mod services;
