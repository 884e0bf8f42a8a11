// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个API端点的具体处理逻辑，所有端点都是只读查询并经过响应缓存
pub mod geo_handler;
pub mod statistics_handler;
