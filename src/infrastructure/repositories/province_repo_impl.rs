// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::geo::{City, Province};
use crate::domain::repositories::geo_repository::{GeoRepository, ProvinceFilter};
use crate::domain::repositories::run_repository::RepositoryError;
use crate::infrastructure::database::entities::{city as city_entity, province as province_entity};
use async_trait::async_trait;
use sea_orm::*;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// 省份数据仓库实现
///
/// 返回的省份会带上其下属城市，城市按主键升序排列。
pub struct ProvinceRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ProvinceRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 批量加载下属城市并挂到对应省份上
    async fn attach_cities(
        &self,
        models: Vec<province_entity::Model>,
    ) -> Result<Vec<Province>, RepositoryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        // callers pass provinces of a single run, so this is one id in practice
        let run_ids: BTreeSet<i32> = models.iter().map(|m| m.crawler_id).collect();
        let cities = city_entity::Entity::find()
            .filter(city_entity::Column::CrawlerId.is_in(run_ids))
            .filter(city_entity::Column::ProvinceId.is_not_null())
            .order_by_asc(city_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        let mut by_province: HashMap<i32, Vec<City>> = HashMap::new();
        for city in cities {
            if let Some(province_id) = city.province_id {
                by_province
                    .entry(province_id)
                    .or_default()
                    .push(city.into());
            }
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let run_id = m.crawler_id;
                let cities = by_province
                    .remove(&m.id)
                    .unwrap_or_default()
                    .into_iter()
                    // a city only belongs to a province of its own run
                    .filter(|c| c.run_id == run_id)
                    .collect();
                let mut province = Province::from(m);
                province.cities = cities;
                province
            })
            .collect())
    }
}

impl From<province_entity::Model> for Province {
    fn from(m: province_entity::Model) -> Self {
        Province {
            id: m.id,
            run_id: m.crawler_id,
            location_id: m.location_id,
            province_name: m.province_name,
            province_short_name: m.province_short_name,
            current_confirmed_count: m.current_confirmed_count,
            confirmed_count: m.confirmed_count,
            suspected_count: m.suspected_count,
            cured_count: m.cured_count,
            dead_count: m.dead_count,
            comment: m.comment,
            create_time: m.create_time.into(),
            modify_time: m.modify_time.into(),
            cities: Vec::new(),
        }
    }
}

#[async_trait]
impl GeoRepository for ProvinceRepositoryImpl {
    type Record = Province;
    type Filter = ProvinceFilter;

    async fn list_by_run(
        &self,
        run_id: i32,
        filter: &ProvinceFilter,
    ) -> Result<Vec<Province>, RepositoryError> {
        let mut query =
            province_entity::Entity::find().filter(province_entity::Column::CrawlerId.eq(run_id));

        if let Some(name) = &filter.province_name {
            query = query.filter(province_entity::Column::ProvinceName.contains(name.as_str()));
        }
        if let Some(short_name) = &filter.province_short_name {
            query =
                query.filter(province_entity::Column::ProvinceShortName.eq(short_name.as_str()));
        }

        let models = query
            .order_by_asc(province_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        self.attach_cities(models).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Province>, RepositoryError> {
        let model = province_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        match model {
            Some(m) => Ok(self.attach_cities(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_name(
        &self,
        run_id: i32,
        name: &str,
    ) -> Result<Option<Province>, RepositoryError> {
        let model = province_entity::Entity::find()
            .filter(province_entity::Column::CrawlerId.eq(run_id))
            .filter(province_entity::Column::ProvinceShortName.eq(name))
            .order_by_asc(province_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;

        match model {
            Some(m) => Ok(self.attach_cities(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }
}
