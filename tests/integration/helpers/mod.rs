// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use ncovrs::domain::models::statistics::Scope;
use ncovrs::infrastructure::cache::cache_manager::CacheManager;
use ncovrs::infrastructure::database::entities::{
    city, country, crawler, goods_guide, notice, province, recommend, rumor, statistics,
    timeline, who_article, wiki,
};
use ncovrs::presentation::routes;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub cache: Arc<CacheManager>,
}

/// 创建已迁移的内存数据库
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

/// 创建测试应用
pub async fn create_test_app() -> TestApp {
    let db = setup_db().await;
    let cache = Arc::new(CacheManager::in_memory(Duration::from_secs(3600), 1000));
    let server = TestServer::new(routes::app(db.clone(), cache.clone())).unwrap();

    TestApp { server, db, cache }
}

/// 2020年2月某日 08:00 UTC
pub fn timestamp(day: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2020, 2, day, 8, 0, 0)
        .unwrap()
        .fixed_offset()
}

/// 插入指定ID的批次，创建时间取 `timestamp(id)`
pub async fn insert_run(db: &DatabaseConnection, id: i32) -> i32 {
    crawler::ActiveModel {
        id: Set(id),
        create_time: Set(timestamp(id as u32)),
        modify_time: Set(timestamp(id as u32)),
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

/// 插入统计快照，累计确诊取 `confirmed`，其余计数为固定值
pub async fn insert_statistics(
    db: &DatabaseConnection,
    run_id: i32,
    country_type: i32,
    confirmed: i64,
) -> i32 {
    statistics::ActiveModel {
        crawler_id: Set(run_id),
        country_type: Set(country_type),
        current_confirmed_count: Set(confirmed - 10),
        confirmed_count: Set(confirmed),
        suspected_count: Set(1),
        serious_count: Set(2),
        cured_count: Set(5),
        dead_count: Set(5),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn insert_scope(db: &DatabaseConnection, run_id: i32, scope: Scope, confirmed: i64) {
    insert_statistics(db, run_id, scope.code(), confirmed).await;
}

pub async fn insert_country(
    db: &DatabaseConnection,
    run_id: i32,
    name: &str,
    continents: &str,
    code: &str,
) -> i32 {
    country::ActiveModel {
        crawler_id: Set(run_id),
        continents: Set(continents.to_string()),
        country_short_code: Set(code.to_string()),
        country_name: Set(name.to_string()),
        country_full_name: Set(format!("{} (full)", name)),
        current_confirmed_count: Set(1),
        confirmed_count: Set(10),
        suspected_count: Set(0),
        cured_count: Set(8),
        dead_count: Set(1),
        create_time: Set(timestamp(run_id as u32)),
        modify_time: Set(timestamp(run_id as u32)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn insert_province(
    db: &DatabaseConnection,
    run_id: i32,
    short_name: &str,
    full_name: &str,
    confirmed: i64,
) -> i32 {
    province::ActiveModel {
        crawler_id: Set(run_id),
        location_id: Set(420000),
        province_name: Set(full_name.to_string()),
        province_short_name: Set(short_name.to_string()),
        current_confirmed_count: Set(confirmed),
        confirmed_count: Set(confirmed),
        suspected_count: Set(0),
        cured_count: Set(0),
        dead_count: Set(0),
        comment: Set(String::new()),
        create_time: Set(timestamp(run_id as u32)),
        modify_time: Set(timestamp(run_id as u32)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn insert_city(
    db: &DatabaseConnection,
    run_id: i32,
    province_id: Option<i32>,
    province_short_name: &str,
    city_name: &str,
) -> i32 {
    city::ActiveModel {
        crawler_id: Set(run_id),
        province_id: Set(province_id),
        location_id: Set(420100),
        province_name: Set(format!("{} Province", province_short_name)),
        province_short_name: Set(province_short_name.to_string()),
        city_name: Set(city_name.to_string()),
        current_confirmed_count: Set(3),
        confirmed_count: Set(3),
        suspected_count: Set(0),
        cured_count: Set(0),
        dead_count: Set(0),
        create_time: Set(timestamp(run_id as u32)),
        modify_time: Set(timestamp(run_id as u32)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn insert_notice(
    db: &DatabaseConnection,
    run_id: i32,
    remarks: &[&str],
    notes: &[&str],
    general_remark: &str,
) {
    insert_raw_notice(db, run_id, json!(remarks), json!(notes), general_remark).await;
}

/// 按原样写入公告的 JSON 列
pub async fn insert_raw_notice(
    db: &DatabaseConnection,
    run_id: i32,
    remarks: Value,
    notes: Value,
    general_remark: &str,
) {
    notice::ActiveModel {
        crawler_id: Set(run_id),
        remarks: Set(remarks),
        notes: Set(notes),
        general_remark: Set(general_remark.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_article(db: &DatabaseConnection, run_id: i32, title: &str) {
    who_article::ActiveModel {
        crawler_id: Set(run_id),
        title: Set(title.to_string()),
        link_url: Set("https://www.who.int/".to_string()),
        img_url: Set("https://img.example.com/who.png".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_recommend(db: &DatabaseConnection, run_id: i32, title: &str) {
    recommend::ActiveModel {
        crawler_id: Set(run_id),
        title: Set(title.to_string()),
        link_url: Set(format!("https://example.com/{}", title)),
        img_url: Set(String::new()),
        content_type: Set(1),
        record_status: Set(1),
        country_type: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_timeline(db: &DatabaseConnection, run_id: i32, title: &str, day: u32) {
    timeline::ActiveModel {
        crawler_id: Set(run_id),
        pub_date: Set(timestamp(day)),
        title: Set(title.to_string()),
        summary: Set(format!("{} summary", title)),
        info_source: Set("news".to_string()),
        source_url: Set(format!("https://example.com/{}", title)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_wiki(db: &DatabaseConnection, run_id: i32, title: &str) {
    wiki::ActiveModel {
        crawler_id: Set(run_id),
        title: Set(title.to_string()),
        link_url: Set(String::new()),
        img_url: Set(String::new()),
        description: Set(format!("{} description", title)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_goods_guide(db: &DatabaseConnection, run_id: i32, title: &str, images: &[&str]) {
    insert_raw_goods_guide(db, run_id, title, json!(images)).await;
}

pub async fn insert_raw_goods_guide(db: &DatabaseConnection, run_id: i32, title: &str, images: Value) {
    goods_guide::ActiveModel {
        crawler_id: Set(run_id),
        title: Set(title.to_string()),
        category_name: Set("mask".to_string()),
        content_img_urls: Set(images),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn insert_rumor(db: &DatabaseConnection, run_id: i32, title: &str) {
    rumor::ActiveModel {
        crawler_id: Set(run_id),
        title: Set(title.to_string()),
        main_summary: Set(String::new()),
        summary: Set(String::new()),
        body: Set(String::new()),
        source_url: Set(String::new()),
        score: Set(1000),
        rumor_type: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

/// 批量插入 `1..=count` 号批次，每个批次一条全球统计
pub async fn insert_runs_with_global_snapshots(db: &DatabaseConnection, count: i32) {
    const BATCH: i32 = 500;

    let mut start = 1;
    while start <= count {
        let end = (start + BATCH - 1).min(count);

        let runs = (start..=end).map(|id| crawler::ActiveModel {
            id: Set(id),
            create_time: Set(timestamp(1)),
            modify_time: Set(timestamp(1)),
        });
        crawler::Entity::insert_many(runs).exec(db).await.unwrap();

        let snapshots = (start..=end).map(|id| statistics::ActiveModel {
            crawler_id: Set(id),
            country_type: Set(Scope::Global.code()),
            current_confirmed_count: Set(0),
            confirmed_count: Set(i64::from(id)),
            suspected_count: Set(0),
            serious_count: Set(0),
            cured_count: Set(0),
            dead_count: Set(0),
            ..Default::default()
        });
        statistics::Entity::insert_many(snapshots).exec(db).await.unwrap();

        start = end + 1;
    }
}
