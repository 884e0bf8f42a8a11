// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const CACHE_HITS_TOTAL: &str = "ncovrs_cache_hits_total";
pub const CACHE_MISSES_TOTAL: &str = "ncovrs_cache_misses_total";
pub const NOT_FOUND_TOTAL: &str = "ncovrs_not_found_total";

/// 初始化指标导出
///
/// 未启用或监听地址无效时只记录日志，不影响服务启动
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(CACHE_HITS_TOTAL, "Total number of response cache hits");
    describe_counter!(CACHE_MISSES_TOTAL, "Total number of response cache misses");
    describe_counter!(NOT_FOUND_TOTAL, "Total number of lookups answered with 404");

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次缓存命中或未命中
pub fn record_cache_lookup(endpoint: &'static str, hit: bool) {
    let name = if hit { CACHE_HITS_TOTAL } else { CACHE_MISSES_TOTAL };
    counter!(name, "endpoint" => endpoint).increment(1);
}

/// 记录一次未找到
pub fn record_not_found() {
    counter!(NOT_FOUND_TOTAL).increment(1);
}
