// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::*;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use ncovrs::domain::models::statistics::Scope;
use serde_json::Value;

fn time_of(value: &Value) -> DateTime<Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

#[tokio::test]
async fn test_health_and_version() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/v1/version").await;
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_latest_returns_404_without_runs() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/latest").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_history_is_empty_without_runs() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/statistics").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), serde_json::json!([]));
}

/// 最新批次只有全球和国内统计、没有公告和文章、两条推荐、没有时间线
#[tokio::test]
async fn test_latest_view_with_partial_scopes_and_missing_relations() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 3).await;
    insert_scope(db, 3, Scope::International, 300).await;
    insert_notice(db, 3, &["old remark"], &["old note"], "old").await;
    insert_article(db, 3, "old article").await;

    insert_run(db, 5).await;
    insert_scope(db, 5, Scope::Global, 5000).await;
    insert_scope(db, 5, Scope::Domestic, 500).await;
    insert_recommend(db, 5, "r1").await;
    insert_recommend(db, 5, "r2").await;

    let response = app.server.get("/v1/latest").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["globalStatistics"]["confirmedCount"], 5000);
    assert_eq!(body["globalStatistics"]["currentConfirmedCount"], 4990);
    assert_eq!(body["domesticStatistics"]["confirmedCount"], 500);
    assert_eq!(body["domesticStatistics"]["seriousCount"], 2);
    assert!(body.get("internationalStatistics").is_none());

    assert_eq!(body["remarks"], serde_json::json!([]));
    assert_eq!(body["notes"], serde_json::json!([]));
    assert_eq!(body["generalRemark"], "");
    assert!(body.as_object().unwrap().contains_key("WHOArticle"));
    assert!(body["WHOArticle"].is_null());

    let titles: Vec<&str> = body["recommends"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["r1", "r2"]);
    assert_eq!(body["timelines"], serde_json::json!([]));
    assert_eq!(body["wikis"], serde_json::json!([]));
    assert_eq!(body["goodsGuides"], serde_json::json!([]));
    assert_eq!(body["rumors"], serde_json::json!([]));

    assert_eq!(time_of(&body["createTime"]), timestamp(5));
    assert_eq!(time_of(&body["modifyTime"]), timestamp(5));
}

#[tokio::test]
async fn test_latest_view_copies_notice_article_and_collections() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    insert_scope(db, 1, Scope::Domestic, 100).await;
    insert_notice(db, 1, &["remark a", "remark b"], &["note a"], "general").await;
    insert_article(db, 1, "WHO update").await;
    insert_timeline(db, 1, "first", 1).await;
    insert_timeline(db, 1, "second", 2).await;
    insert_wiki(db, 1, "wash hands").await;
    insert_goods_guide(db, 1, "masks", &["https://img/1.png", "https://img/2.png"]).await;
    insert_rumor(db, 1, "rumor").await;

    let body: Value = app.server.get("/v1/latest").await.json();

    assert_eq!(body["remarks"], serde_json::json!(["remark a", "remark b"]));
    assert_eq!(body["notes"], serde_json::json!(["note a"]));
    assert_eq!(body["generalRemark"], "general");
    assert_eq!(body["WHOArticle"]["title"], "WHO update");
    assert_eq!(body["WHOArticle"]["linkUrl"], "https://www.who.int/");
    assert_eq!(body["timelines"][0]["title"], "first");
    assert_eq!(body["timelines"][1]["title"], "second");
    assert_eq!(time_of(&body["timelines"][1]["pubDate"]), timestamp(2));
    assert_eq!(body["wikis"][0]["description"], "wash hands description");
    assert_eq!(
        body["goodsGuides"][0]["contentImgUrls"],
        serde_json::json!(["https://img/1.png", "https://img/2.png"])
    );
    assert_eq!(body["rumors"][0]["score"], 1000);
}

/// 批次3有两条快照、批次4没有快照、批次5有一条快照
#[tokio::test]
async fn test_history_lists_runs_with_snapshots_newest_first() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 3).await;
    insert_scope(db, 3, Scope::Global, 300).await;
    insert_scope(db, 3, Scope::Domestic, 30).await;
    insert_run(db, 4).await;
    insert_run(db, 5).await;
    insert_scope(db, 5, Scope::International, 500).await;

    let response = app.server.get("/v1/statistics").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let views = body.as_array().unwrap();

    assert_eq!(views.len(), 2);
    assert_eq!(time_of(&views[0]["createTime"]), timestamp(5));
    assert_eq!(views[0]["internationalStatistics"]["confirmedCount"], 500);
    assert!(views[0].get("globalStatistics").is_none());
    assert!(views[0].get("domesticStatistics").is_none());

    assert_eq!(time_of(&views[1]["createTime"]), timestamp(3));
    assert_eq!(views[1]["globalStatistics"]["confirmedCount"], 300);
    assert_eq!(views[1]["domesticStatistics"]["confirmedCount"], 30);
    assert!(views[1].get("internationalStatistics").is_none());
}

/// 公告和物资指南里不是字符串数组的 JSON 退化为空数组，其余字段照常返回
#[tokio::test]
async fn test_latest_view_tolerates_malformed_json_lists() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    insert_scope(db, 1, Scope::Global, 100).await;
    insert_raw_notice(
        db,
        1,
        serde_json::json!("not a list"),
        serde_json::json!([1, 2]),
        "general",
    )
    .await;
    insert_raw_goods_guide(db, 1, "masks", serde_json::json!({"url": "x"})).await;

    let response = app.server.get("/v1/latest").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["remarks"], serde_json::json!([]));
    assert_eq!(body["notes"], serde_json::json!([]));
    assert_eq!(body["generalRemark"], "general");
    assert_eq!(body["goodsGuides"][0]["title"], "masks");
    assert_eq!(body["goodsGuides"][0]["contentImgUrls"], serde_json::json!([]));
    assert_eq!(body["globalStatistics"]["confirmedCount"], 100);
}

/// 批次数量超过 SQLite 单条语句的绑定参数上限时历史列表仍然完整
#[tokio::test]
async fn test_history_handles_more_runs_than_bind_parameter_limit() {
    let app = create_test_app().await;

    insert_runs_with_global_snapshots(app.db.as_ref(), 33_000).await;

    let response = app.server.get("/v1/statistics").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let views = body.as_array().unwrap();

    assert_eq!(views.len(), 33_000);
    assert_eq!(views[0]["globalStatistics"]["confirmedCount"], 33_000);
    assert_eq!(views[32_999]["globalStatistics"]["confirmedCount"], 1);
}

#[tokio::test]
async fn test_latest_is_served_from_cache() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    insert_scope(db, 1, Scope::Global, 100).await;

    let first: Value = app.server.get("/v1/latest").await.json();

    insert_run(db, 2).await;
    insert_scope(db, 2, Scope::Global, 200).await;

    let second: Value = app.server.get("/v1/latest").await.json();

    assert_eq!(first, second);
    assert_eq!(second["globalStatistics"]["confirmedCount"], 100);
    assert_eq!(app.cache.get_stats().hits, 1);

    app.cache.clear().await.unwrap();
    let third: Value = app.server.get("/v1/latest").await.json();
    assert_eq!(third["globalStatistics"]["confirmedCount"], 200);
}

#[tokio::test]
async fn test_not_found_is_not_cached() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/latest").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    insert_run(app.db.as_ref(), 1).await;

    let response = app.server.get("/v1/latest").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_province_list_is_scoped_to_latest_run() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    let old_hubei = insert_province(db, 1, "Hubei", "Hubei Province", 100).await;
    insert_city(db, 1, Some(old_hubei), "Hubei", "Wuhan").await;

    insert_run(db, 2).await;
    let hubei = insert_province(db, 2, "Hubei", "Hubei Province", 200).await;
    let guangdong = insert_province(db, 2, "Guangdong", "Guangdong Province", 20).await;
    insert_city(db, 2, Some(hubei), "Hubei", "Wuhan").await;
    insert_city(db, 2, Some(hubei), "Hubei", "Xiaogan").await;
    insert_city(db, 2, Some(guangdong), "Guangdong", "Shenzhen").await;

    let body: Value = app.server.get("/v1/provinces").await.json();
    let provinces = body.as_array().unwrap();

    assert_eq!(provinces.len(), 2);
    assert_eq!(provinces[0]["id"], hubei);
    assert_eq!(provinces[0]["confirmedCount"], 200);
    assert_eq!(provinces[1]["provinceShortName"], "Guangdong");

    let cities: Vec<&str> = provinces[0]["cities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["cityName"].as_str().unwrap())
        .collect();
    assert_eq!(cities, vec!["Wuhan", "Xiaogan"]);
    assert_eq!(provinces[1]["cities"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_province_list_filters() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    insert_province(db, 1, "Hubei", "Hubei Province", 200).await;
    insert_province(db, 1, "Hunan", "Hunan Province", 20).await;
    insert_province(db, 1, "Guangdong", "Guangdong Province", 10).await;

    let body: Value = app
        .server
        .get("/v1/provinces")
        .add_query_param("provinceShortName", "Hunan")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["provinceName"], "Hunan Province");

    let body: Value = app
        .server
        .get("/v1/provinces")
        .add_query_param("provinceName", "Hu")
        .add_query_param("unknown", "ignored")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_province_name_lookup_only_matches_latest_run() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    insert_province(db, 1, "Tibet", "Tibet Autonomous Region", 1).await;
    insert_run(db, 2).await;
    let hubei = insert_province(db, 2, "Hubei", "Hubei Province", 200).await;

    let response = app.server.get("/v1/provinces/name/Hubei").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], hubei);

    let response = app.server.get("/v1/provinces/name/Tibet").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_province_id_lookup_reaches_older_runs() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    let old = insert_province(db, 1, "Hubei", "Hubei Province", 100).await;
    insert_city(db, 1, Some(old), "Hubei", "Wuhan").await;
    insert_run(db, 2).await;
    insert_province(db, 2, "Hubei", "Hubei Province", 200).await;

    let response = app.server.get(&format!("/v1/provinces/{}", old)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["confirmedCount"], 100);
    assert_eq!(body["cities"][0]["cityName"], "Wuhan");

    let response = app.server.get("/v1/provinces/9999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.get("/v1/provinces/not-a-number").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_country_endpoints() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    let japan = insert_country(db, 1, "Japan", "Asia", "JPN").await;
    insert_country(db, 1, "Italy", "Europe", "ITA").await;
    insert_country(db, 1, "Korea", "Asia", "KOR").await;

    let body: Value = app
        .server
        .get("/v1/countries")
        .add_query_param("continents", "Asia")
        .await
        .json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["countryName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Japan", "Korea"]);

    let body: Value = app
        .server
        .get("/v1/countries")
        .add_query_param("countryShortCode", "ITA")
        .await
        .json();
    assert_eq!(body[0]["countryFullName"], "Italy (full)");

    let body: Value = app.server.get("/v1/countries/name/Japan").await.json();
    assert_eq!(body["id"], japan);
    assert_eq!(body["countryShortCode"], "JPN");
    assert!(body.get("runId").is_none());

    let response = app.server.get("/v1/countries/name/Mars").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_city_endpoints() {
    let app = create_test_app().await;
    let db = app.db.as_ref();

    insert_run(db, 1).await;
    let wuhan = insert_city(db, 1, None, "Hubei", "Wuhan").await;
    insert_city(db, 1, None, "Hubei", "Huanggang").await;
    insert_city(db, 1, None, "Guangdong", "Guangzhou").await;

    let body: Value = app
        .server
        .get("/v1/cities")
        .add_query_param("provinceShortName", "Hubei")
        .await
        .json();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let body: Value = app
        .server
        .get("/v1/cities")
        .add_query_param("cityName", "Guang")
        .await
        .json();
    assert_eq!(body[0]["cityName"], "Guangzhou");

    let body: Value = app.server.get(&format!("/v1/cities/{}", wuhan)).await.json();
    assert_eq!(body["cityName"], "Wuhan");
    assert_eq!(body["provinceName"], "Hubei Province");

    let response = app.server.get("/v1/cities/name/Wuhan").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_geo_list_returns_404_without_runs() {
    let app = create_test_app().await;

    for path in ["/v1/countries", "/v1/provinces", "/v1/cities"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
