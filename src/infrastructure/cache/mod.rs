// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供响应缓存的策略实现与统一管理
pub mod cache_manager;
pub mod cache_strategy;
pub mod redis_client;
