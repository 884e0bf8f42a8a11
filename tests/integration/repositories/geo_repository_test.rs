// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::*;
use ncovrs::domain::repositories::geo_repository::{
    CityFilter, CountryFilter, GeoRepository, ProvinceFilter,
};
use ncovrs::infrastructure::repositories::city_repo_impl::CityRepositoryImpl;
use ncovrs::infrastructure::repositories::country_repo_impl::CountryRepositoryImpl;
use ncovrs::infrastructure::repositories::province_repo_impl::ProvinceRepositoryImpl;

#[tokio::test]
async fn test_country_filters_combine() {
    let db = setup_db().await;
    let repo = CountryRepositoryImpl::new(db.clone());

    insert_run(db.as_ref(), 1).await;
    insert_country(db.as_ref(), 1, "Japan", "Asia", "JPN").await;
    insert_country(db.as_ref(), 1, "South Korea", "Asia", "KOR").await;
    insert_country(db.as_ref(), 1, "North Macedonia", "Europe", "MKD").await;
    insert_run(db.as_ref(), 2).await;
    insert_country(db.as_ref(), 2, "Japan", "Asia", "JPN").await;

    let filter = CountryFilter {
        continents: Some("Asia".to_string()),
        country_name: Some("Korea".to_string()),
        ..Default::default()
    };
    let countries = repo.list_by_run(1, &filter).await.unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].country_short_code, "KOR");
    assert_eq!(countries[0].run_id, 1);

    let all = repo.list_by_run(1, &CountryFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

/// 同一批次内名称重复时取主键最小的记录
#[tokio::test]
async fn test_duplicate_name_resolves_to_lowest_id() {
    let db = setup_db().await;
    let repo = CityRepositoryImpl::new(db.clone());

    insert_run(db.as_ref(), 1).await;
    let first = insert_city(db.as_ref(), 1, None, "Hubei", "Wuhan").await;
    insert_city(db.as_ref(), 1, None, "Hubei", "Wuhan").await;

    let city = repo.find_by_name(1, "Wuhan").await.unwrap().unwrap();
    assert_eq!(city.id, first);

    assert!(repo.find_by_name(2, "Wuhan").await.unwrap().is_none());
}

#[tokio::test]
async fn test_city_filter_by_province() {
    let db = setup_db().await;
    let repo = CityRepositoryImpl::new(db.clone());

    insert_run(db.as_ref(), 1).await;
    insert_city(db.as_ref(), 1, None, "Hubei", "Wuhan").await;
    insert_city(db.as_ref(), 1, None, "Guangdong", "Shenzhen").await;

    let filter = CityFilter {
        province_short_name: Some("Guangdong".to_string()),
        ..Default::default()
    };
    let cities = repo.list_by_run(1, &filter).await.unwrap();

    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].city_name, "Shenzhen");
}

#[tokio::test]
async fn test_province_carries_its_cities() {
    let db = setup_db().await;
    let repo = ProvinceRepositoryImpl::new(db.clone());

    insert_run(db.as_ref(), 1).await;
    let hubei = insert_province(db.as_ref(), 1, "Hubei", "Hubei Province", 100).await;
    let guangdong = insert_province(db.as_ref(), 1, "Guangdong", "Guangdong Province", 10).await;
    let wuhan = insert_city(db.as_ref(), 1, Some(hubei), "Hubei", "Wuhan").await;
    insert_city(db.as_ref(), 1, Some(guangdong), "Guangdong", "Shenzhen").await;
    let xiaogan = insert_city(db.as_ref(), 1, Some(hubei), "Hubei", "Xiaogan").await;
    insert_city(db.as_ref(), 1, None, "Hubei", "Unassigned").await;

    let province = repo.find_by_name(1, "Hubei").await.unwrap().unwrap();
    let city_ids: Vec<i32> = province.cities.iter().map(|c| c.id).collect();
    assert_eq!(city_ids, vec![wuhan, xiaogan]);

    let filter = ProvinceFilter {
        province_short_name: Some("Guangdong".to_string()),
        ..Default::default()
    };
    let provinces = repo.list_by_run(1, &filter).await.unwrap();
    assert_eq!(provinces.len(), 1);
    assert_eq!(provinces[0].cities.len(), 1);
    assert_eq!(provinces[0].cities[0].city_name, "Shenzhen");

    let by_id = repo.find_by_id(guangdong).await.unwrap().unwrap();
    assert_eq!(by_id.province_name, "Guangdong Province");
    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}
