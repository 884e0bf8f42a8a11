// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 连接池、启动迁移以及全部 sea-orm 实体
pub mod connection;
pub mod entities;
