//! Cache
//!
//! Este módulo contiene el cliente Redis y el almacén de mensajes flash.

pub mod cache_config;
pub mod flash_cache;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use flash_cache::{FlashCache, FlashStore};
pub use redis_client::RedisClient;
