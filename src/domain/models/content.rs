// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 批次公告，每个批次至多一条
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub remarks: Vec<String>,
    pub notes: Vec<String>,
    pub general_remark: String,
}

/// WHO 文章，每个批次至多一篇
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub link_url: String,
    pub img_url: String,
}

/// 推荐内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommend {
    pub title: String,
    pub link_url: String,
    pub img_url: String,
    pub content_type: i32,
    pub record_status: i32,
    pub country_type: i32,
}

/// 时间线事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub pub_date: DateTime<Utc>,
    pub title: String,
    pub summary: String,
    pub info_source: String,
    pub source_url: String,
}

/// 防护知识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wiki {
    pub title: String,
    pub link_url: String,
    pub img_url: String,
    pub description: String,
}

/// 防护用品指南
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodsGuide {
    pub title: String,
    pub category_name: String,
    pub content_img_urls: Vec<String>,
}

/// 辟谣信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rumor {
    pub title: String,
    pub main_summary: String,
    pub summary: String,
    pub body: String,
    pub source_url: String,
    pub score: i32,
    pub rumor_type: i32,
}
