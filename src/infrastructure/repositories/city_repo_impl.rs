// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::geo::City;
use crate::domain::repositories::geo_repository::{CityFilter, GeoRepository};
use crate::domain::repositories::run_repository::RepositoryError;
use crate::infrastructure::database::entities::city as city_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 城市数据仓库实现
pub struct CityRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CityRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<city_entity::Model> for City {
    fn from(m: city_entity::Model) -> Self {
        City {
            id: m.id,
            run_id: m.crawler_id,
            province_id: m.province_id,
            location_id: m.location_id,
            province_name: m.province_name,
            province_short_name: m.province_short_name,
            city_name: m.city_name,
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
impl GeoRepository for CityRepositoryImpl {
    type Record = City;
    type Filter = CityFilter;

    async fn list_by_run(
        &self,
        run_id: i32,
        filter: &CityFilter,
    ) -> Result<Vec<City>, RepositoryError> {
        let mut query =
            city_entity::Entity::find().filter(city_entity::Column::CrawlerId.eq(run_id));

        if let Some(short_name) = &filter.province_short_name {
            query = query.filter(city_entity::Column::ProvinceShortName.eq(short_name.as_str()));
        }
        if let Some(name) = &filter.city_name {
            query = query.filter(city_entity::Column::CityName.contains(name.as_str()));
        }

        let models = query
            .order_by_asc(city_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<City>, RepositoryError> {
        let model = city_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, run_id: i32, name: &str) -> Result<Option<City>, RepositoryError> {
        let model = city_entity::Entity::find()
            .filter(city_entity::Column::CrawlerId.eq(run_id))
            .filter(city_entity::Column::CityName.eq(name))
            .order_by_asc(city_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}
