pub mod settings_repository;

pub use settings_repository::*;

use deadpool_redis::{Config as RedisConfig, Pool, Runtime};

use crate::error::{AppError, Result};

/// Create a Redis connection pool
pub fn create_pool(redis_url: &str) -> Result<Pool> {
    let redis_config = RedisConfig::from_url(redis_url);
    let pool = redis_config
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| AppError::RedisError(format!("Failed to create Redis pool: {}", e)))?;

    Ok(pool)
}
