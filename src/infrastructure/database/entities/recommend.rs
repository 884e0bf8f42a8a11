// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recommends")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crawler_id: i32,
    pub title: String,
    pub link_url: String,
    pub img_url: String,
    pub content_type: i32,
    pub record_status: i32,
    pub country_type: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
