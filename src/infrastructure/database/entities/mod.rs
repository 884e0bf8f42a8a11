// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 除批次表外，每张表都通过 crawler_id 归属于一个批次
pub mod city;
pub mod country;
pub mod crawler;
pub mod goods_guide;
pub mod notice;
pub mod province;
pub mod recommend;
pub mod rumor;
pub mod statistics;
pub mod timeline;
pub mod who_article;
pub mod wiki;
