// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crawler_id: i32,
    pub continents: String,
    pub country_short_code: String,
    pub country_name: String,
    pub country_full_name: String,
    pub current_confirmed_count: i64,
    pub confirmed_count: i64,
    pub suspected_count: i64,
    pub cured_count: i64,
    pub dead_count: i64,
    pub create_time: ChronoDateTimeWithTimeZone,
    pub modify_time: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
