// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::settings::{CacheSettings, CacheType};
use crate::infrastructure::cache::redis_client::RedisClient;

/// 缓存统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub stores: u64,
}

/// 统计计数器
#[derive(Debug, Default)]
struct StatsCounter {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    stores: AtomicU64,
}

impl StatsCounter {
    fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            stores: self.stores.load(Ordering::Relaxed),
        }
    }
}

/// 缓存条目
#[derive(Clone)]
struct CacheEntry {
    data: String,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(data: String, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// 缓存策略接口
///
/// 缓存值是序列化后的 JSON 响应体
#[async_trait]
pub trait CacheStrategy: Send + Sync {
    /// 获取缓存值
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// 设置缓存值，`ttl` 为空时使用配置的有效期
    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()>;

    /// 清空缓存
    async fn clear(&self) -> Result<()>;

    /// 获取缓存统计信息
    fn get_stats(&self) -> CacheStats;
}

/// 内存缓存策略
///
/// 过期条目在读取时惰性删除，超过容量时先清理过期条目，再淘汰最早写入的条目
pub struct MemoryCacheStrategy {
    cache: DashMap<String, CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    stats: StatsCounter,
}

impl MemoryCacheStrategy {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            cache: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
            stats: StatsCounter::default(),
        }
    }

    fn evict_if_needed(&self) {
        if self.cache.len() <= self.max_entries {
            return;
        }

        let before = self.cache.len();
        self.cache.retain(|_, entry| !entry.is_expired());

        let overflow = self.cache.len().saturating_sub(self.max_entries);
        if overflow > 0 {
            let mut entries: Vec<(String, Instant)> = self
                .cache
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().created_at))
                .collect();
            entries.sort_by_key(|(_, created_at)| *created_at);

            for (key, _) in entries.into_iter().take(overflow) {
                self.cache.remove(&key);
            }
        }

        let evicted = before.saturating_sub(self.cache.len()) as u64;
        self.stats.evictions.fetch_add(evicted, Ordering::Relaxed);
        debug!("Evicted {} entries from memory cache", evicted);
    }
}

#[async_trait]
impl CacheStrategy for MemoryCacheStrategy {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let expired = match self.cache.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(Some(entry.data.clone()));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.cache.remove(key);
        }
        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()> {
        let ttl = ttl.unwrap_or(self.ttl);
        let size = value.len();

        self.cache.insert(key.to_string(), CacheEntry::new(value, ttl));
        self.evict_if_needed();
        self.stats.stores.fetch_add(1, Ordering::Relaxed);

        debug!("Stored {} bytes in memory cache for key: {}", size, key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.cache.clear();
        info!("Cleared all memory cache entries");
        Ok(())
    }

    fn get_stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

/// Redis缓存策略
pub struct RedisCacheStrategy {
    redis_client: Arc<RedisClient>,
    ttl: Duration,
    stats: StatsCounter,
}

impl RedisCacheStrategy {
    /// Redis 键前缀
    const KEY_PREFIX: &'static str = "ncovrs:cache:";

    pub fn new(redis_client: Arc<RedisClient>, ttl: Duration) -> Self {
        Self {
            redis_client,
            ttl,
            stats: StatsCounter::default(),
        }
    }

    fn generate_cache_key(&self, key: &str) -> String {
        format!("{}{}", Self::KEY_PREFIX, key)
    }
}

#[async_trait]
impl CacheStrategy for RedisCacheStrategy {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let cache_key = self.generate_cache_key(key);

        match self.redis_client.get(&cache_key).await? {
            Some(json_str) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {}", key);
                Ok(Some(json_str))
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                debug!("Cache miss for key: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Option<Duration>) -> Result<()> {
        let cache_key = self.generate_cache_key(key);
        // SET EX rejects a zero expiry
        let ttl = ttl.unwrap_or(self.ttl).as_secs().max(1);

        self.redis_client.set(&cache_key, &value, ttl).await?;
        self.stats.stores.fetch_add(1, Ordering::Relaxed);

        debug!("Stored {} bytes in Redis cache for key: {}", value.len(), key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let removed = self.redis_client.delete_by_prefix(Self::KEY_PREFIX).await?;
        info!("Cleared {} Redis cache entries", removed);
        Ok(())
    }

    fn get_stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

/// 缓存策略工厂
pub struct CacheStrategyFactory;

impl CacheStrategyFactory {
    /// 根据配置创建缓存策略
    ///
    /// 选择 Redis 但未提供客户端时回退到内存缓存
    pub fn create_strategy(
        settings: &CacheSettings,
        redis_client: Option<Arc<RedisClient>>,
    ) -> Box<dyn CacheStrategy> {
        let ttl = Duration::from_secs(settings.ttl_seconds);

        match (settings.cache_type, redis_client) {
            (CacheType::Redis, Some(client)) => Box::new(RedisCacheStrategy::new(client, ttl)),
            (CacheType::Redis, None) => {
                tracing::warn!("Redis cache selected without a client, using memory cache");
                Box::new(MemoryCacheStrategy::new(ttl, settings.max_entries))
            }
            (CacheType::Memory, _) => {
                Box::new(MemoryCacheStrategy::new(ttl, settings.max_entries))
            }
        }
    }
}
