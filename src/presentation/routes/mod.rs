// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::city_repo_impl::CityRepositoryImpl;
use crate::infrastructure::repositories::content_repo_impl::ContentRepositoryImpl;
use crate::infrastructure::repositories::country_repo_impl::CountryRepositoryImpl;
use crate::infrastructure::repositories::province_repo_impl::ProvinceRepositoryImpl;
use crate::infrastructure::repositories::run_repo_impl::RunRepositoryImpl;
use crate::infrastructure::repositories::statistics_repo_impl::StatisticsRepositoryImpl;
use crate::infrastructure::cache::cache_manager::CacheManager;
use crate::presentation::handlers::{geo_handler, statistics_handler};
use axum::{routing::get, Extension, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 处理器依赖的仓库和缓存通过 `Extension` 层注入
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let statistics_routes = Router::new()
        .route(
            "/v1/latest",
            get(statistics_handler::get_latest::<
                RunRepositoryImpl,
                StatisticsRepositoryImpl,
                ContentRepositoryImpl,
            >),
        )
        .route(
            "/v1/statistics",
            get(statistics_handler::list_history::<
                RunRepositoryImpl,
                StatisticsRepositoryImpl,
                ContentRepositoryImpl,
            >),
        );

    let geo_routes = Router::new()
        .route(
            "/v1/countries",
            get(geo_handler::list_records::<RunRepositoryImpl, CountryRepositoryImpl>),
        )
        .route(
            "/v1/countries/{id}",
            get(geo_handler::get_record_by_id::<RunRepositoryImpl, CountryRepositoryImpl>),
        )
        .route(
            "/v1/countries/name/{name}",
            get(geo_handler::get_record_by_name::<RunRepositoryImpl, CountryRepositoryImpl>),
        )
        .route(
            "/v1/provinces",
            get(geo_handler::list_records::<RunRepositoryImpl, ProvinceRepositoryImpl>),
        )
        .route(
            "/v1/provinces/{id}",
            get(geo_handler::get_record_by_id::<RunRepositoryImpl, ProvinceRepositoryImpl>),
        )
        .route(
            "/v1/provinces/name/{name}",
            get(geo_handler::get_record_by_name::<RunRepositoryImpl, ProvinceRepositoryImpl>),
        )
        .route(
            "/v1/cities",
            get(geo_handler::list_records::<RunRepositoryImpl, CityRepositoryImpl>),
        )
        .route(
            "/v1/cities/{id}",
            get(geo_handler::get_record_by_id::<RunRepositoryImpl, CityRepositoryImpl>),
        )
        .route(
            "/v1/cities/name/{name}",
            get(geo_handler::get_record_by_name::<RunRepositoryImpl, CityRepositoryImpl>),
        );

    Router::new()
        .merge(public_routes)
        .merge(statistics_routes)
        .merge(geo_routes)
}

/// 创建带依赖注入的完整应用
///
/// # 参数
///
/// * `db` - 数据库连接
/// * `cache` - 响应缓存
pub fn app(db: Arc<DatabaseConnection>, cache: Arc<CacheManager>) -> Router {
    routes()
        .layer(Extension(Arc::new(RunRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(StatisticsRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(ContentRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(CountryRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(ProvinceRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(CityRepositoryImpl::new(db))))
        .layer(Extension(cache))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
