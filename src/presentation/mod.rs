// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 错误到HTTP响应的映射
pub mod errors;
pub mod handlers;
pub mod routes;
