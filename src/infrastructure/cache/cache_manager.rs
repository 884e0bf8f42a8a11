// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::settings::{CacheSettings, CacheType};
use crate::infrastructure::cache::cache_strategy::{
    CacheStats, CacheStrategy, CacheStrategyFactory, MemoryCacheStrategy,
};
use crate::infrastructure::cache::redis_client::RedisClient;
use crate::infrastructure::metrics;

/// 响应缓存管理器
///
/// 以旁路缓存方式包裹查询：命中直接返回，未命中时计算并写入。
/// 只缓存成功的结果；缓存后端出错时记录日志并按未命中处理。
pub struct CacheManager {
    strategy: Box<dyn CacheStrategy>,
}

impl CacheManager {
    /// 根据配置创建缓存管理器
    pub async fn new(settings: &CacheSettings) -> Result<Self> {
        let redis_client = match (settings.cache_type, settings.redis_url.as_deref()) {
            (CacheType::Redis, Some(url)) => Some(Arc::new(RedisClient::new(url).await?)),
            _ => None,
        };

        info!(
            "Response cache: {:?}, ttl {}s",
            settings.cache_type, settings.ttl_seconds
        );

        Ok(Self {
            strategy: CacheStrategyFactory::create_strategy(settings, redis_client),
        })
    }

    /// 创建进程内缓存管理器
    pub fn in_memory(ttl: Duration, max_entries: usize) -> Self {
        Self {
            strategy: Box::new(MemoryCacheStrategy::new(ttl, max_entries)),
        }
    }

    /// 读取并反序列化缓存值
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.strategy.get(key).await {
            Ok(Some(json_str)) => match serde_json::from_str(&json_str) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Discarding unreadable cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Cache read failed for key {}: {}", key, e);
                None
            }
        }
    }

    /// 序列化并写入缓存，失败只记录日志
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        let json_str = match serde_json::to_string(value) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize cache entry {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.strategy.set(key, json_str, None).await {
            warn!("Cache write failed for key {}: {}", key, e);
        }
    }

    /// 旁路缓存查询
    ///
    /// # 参数
    ///
    /// * `endpoint` - 端点名，用于指标标签
    /// * `key` - 缓存键
    /// * `compute` - 未命中时执行的查询
    pub async fn cached<T, E, F, Fut>(
        &self,
        endpoint: &'static str,
        key: &str,
        compute: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get_json(key).await {
            debug!("Cache hit for {}", key);
            metrics::record_cache_lookup(endpoint, true);
            return Ok(value);
        }

        debug!("Cache miss for {}", key);
        metrics::record_cache_lookup(endpoint, false);

        let value = compute().await?;
        self.set_json(key, &value).await;
        Ok(value)
    }

    /// 清空缓存
    pub async fn clear(&self) -> Result<()> {
        self.strategy.clear().await
    }

    /// 获取缓存统计信息
    pub fn get_stats(&self) -> CacheStats {
        self.strategy.get_stats()
    }

    /// 获取缓存命中率
    pub fn get_hit_rate(&self) -> f64 {
        let stats = self.get_stats();
        let total_requests = stats.hits + stats.misses;

        if total_requests == 0 {
            0.0
        } else {
            stats.hits as f64 / total_requests as f64
        }
    }

    /// 生成缓存键
    ///
    /// 键由端点和排序后的查询参数组成，空参数被忽略，
    /// 因此参数顺序不同的同一查询得到相同的键
    pub fn generate_cache_key<P: Serialize + ?Sized>(endpoint: &str, params: &P) -> String {
        let parts: BTreeMap<String, String> = match serde_json::to_value(params) {
            Ok(serde_json::Value::Object(map)) => map
                .into_iter()
                .filter_map(|(k, v)| match v {
                    serde_json::Value::Null => None,
                    serde_json::Value::String(s) => Some((k, s)),
                    other => Some((k, other.to_string())),
                })
                .collect(),
            Ok(serde_json::Value::Null) | Err(_) => BTreeMap::new(),
            Ok(other) => BTreeMap::from([(String::from("_"), other.to_string())]),
        };

        if parts.is_empty() {
            return endpoint.to_string();
        }

        let query = parts
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", endpoint, query)
    }
}
