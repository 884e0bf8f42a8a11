// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::geo::Country;
use crate::domain::repositories::geo_repository::{CountryFilter, GeoRepository};
use crate::domain::repositories::run_repository::RepositoryError;
use crate::infrastructure::database::entities::country as country_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 国家数据仓库实现
pub struct CountryRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CountryRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<country_entity::Model> for Country {
    fn from(m: country_entity::Model) -> Self {
        Country {
            id: m.id,
            run_id: m.crawler_id,
            continents: m.continents,
            country_short_code: m.country_short_code,
            country_name: m.country_name,
            country_full_name: m.country_full_name,
            current_confirmed_count: m.current_confirmed_count,
            confirmed_count: m.confirmed_count,
            suspected_count: m.suspected_count,
            cured_count: m.cured_count,
            dead_count: m.dead_count,
            create_time: m.create_time.into(),
            modify_time: m.modify_time.into(),
        }
    }
}

#[async_trait]
impl GeoRepository for CountryRepositoryImpl {
    type Record = Country;
    type Filter = CountryFilter;

    async fn list_by_run(
        &self,
        run_id: i32,
        filter: &CountryFilter,
    ) -> Result<Vec<Country>, RepositoryError> {
        let mut query =
            country_entity::Entity::find().filter(country_entity::Column::CrawlerId.eq(run_id));

        if let Some(continents) = &filter.continents {
            query = query.filter(country_entity::Column::Continents.eq(continents.as_str()));
        }
        if let Some(code) = &filter.country_short_code {
            query = query.filter(country_entity::Column::CountryShortCode.eq(code.as_str()));
        }
        if let Some(name) = &filter.country_name {
            query = query.filter(country_entity::Column::CountryName.contains(name.as_str()));
        }

        let models = query
            .order_by_asc(country_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Country>, RepositoryError> {
        let model = country_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_name(
        &self,
        run_id: i32,
        name: &str,
    ) -> Result<Option<Country>, RepositoryError> {
        let model = country_entity::Entity::find()
            .filter(country_entity::Column::CrawlerId.eq(run_id))
            .filter(country_entity::Column::CountryName.eq(name))
            .order_by_asc(country_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}
