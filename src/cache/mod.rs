//! 缓存层
//!
//! 对象缓存抽象 + Moka 内存实现，主要用于 JWT 中间件的用户信息缓存。

mod moka;

use std::sync::Arc;

use async_trait::async_trait;

pub use self::moka::MokaCacheWrapper;

/// 缓存查询结果
pub enum CacheResult<T> {
    Found(T),
    NotFound,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 创建缓存实例
pub fn create_cache() -> Arc<dyn ObjectCache> {
    Arc::new(MokaCacheWrapper::new())
}
