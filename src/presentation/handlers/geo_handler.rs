// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::{
    domain::{
        models::geo::GeoRecord,
        repositories::{geo_repository::GeoRepository, run_repository::RunRepository},
        services::geo_lookup_service::GeoLookupService,
    },
    infrastructure::cache::cache_manager::CacheManager,
    presentation::errors::AppError,
};

/// 列出最新批次的地区记录
///
/// 查询参数即过滤条件，未知参数被忽略
pub async fn list_records<RR, GR>(
    Extension(run_repo): Extension<Arc<RR>>,
    Extension(geo_repo): Extension<Arc<GR>>,
    Extension(cache): Extension<Arc<CacheManager>>,
    Query(filter): Query<GR::Filter>,
) -> Result<Json<Vec<GR::Record>>, AppError>
where
    RR: RunRepository + 'static,
    GR: GeoRepository + 'static,
    GR::Record: Serialize + DeserializeOwned,
    GR::Filter: Serialize + DeserializeOwned,
{
    let kind = <GR::Record as GeoRecord>::KIND;
    let service = GeoLookupService::new(run_repo, geo_repo);
    let key = CacheManager::generate_cache_key(&format!("{}:list", kind), &filter);

    let records = cache
        .cached(kind, &key, || service.list_for_latest_run(&filter))
        .await?;

    Ok(Json(records))
}

/// 按主键获取地区记录，可以是历史批次的记录
pub async fn get_record_by_id<RR, GR>(
    Extension(run_repo): Extension<Arc<RR>>,
    Extension(geo_repo): Extension<Arc<GR>>,
    Extension(cache): Extension<Arc<CacheManager>>,
    Path(id): Path<i32>,
) -> Result<Json<GR::Record>, AppError>
where
    RR: RunRepository + 'static,
    GR: GeoRepository + 'static,
    GR::Record: Serialize + DeserializeOwned,
{
    let kind = <GR::Record as GeoRecord>::KIND;
    let service = GeoLookupService::new(run_repo, geo_repo);
    let key = CacheManager::generate_cache_key(&format!("{}:id:{}", kind, id), &());

    let record = cache
        .cached(kind, &key, || service.get_by_id(id))
        .await?;

    Ok(Json(record))
}

/// 在最新批次内按名称获取地区记录
pub async fn get_record_by_name<RR, GR>(
    Extension(run_repo): Extension<Arc<RR>>,
    Extension(geo_repo): Extension<Arc<GR>>,
    Extension(cache): Extension<Arc<CacheManager>>,
    Path(name): Path<String>,
) -> Result<Json<GR::Record>, AppError>
where
    RR: RunRepository + 'static,
    GR: GeoRepository + 'static,
    GR::Record: Serialize + DeserializeOwned,
{
    let kind = <GR::Record as GeoRecord>::KIND;
    let service = GeoLookupService::new(run_repo, geo_repo);
    let key = CacheManager::generate_cache_key(&format!("{}:name:{}", kind, name), &());

    let record = cache
        .cached(kind, &key, || service.get_by_name(&name))
        .await?;

    Ok(Json(record))
}
