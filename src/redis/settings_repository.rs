use async_trait::async_trait;
use deadpool_redis::Pool;

use crate::error::{AppError, Result};
use crate::models::MailjetOptions;
use crate::settings::SettingsStore;

const OPTIONS_KEY: &str = "mailjet_options";
const API_KEY_FIELD: &str = "mailjet_api_key_field";
const PRIVATE_KEY_FIELD: &str = "mailjet_private_key_field";

/// Settings repository for Redis operations
#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool,
}

impl SettingsRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

/// Both fields written in one MULTI/EXEC so they never diverge
fn save_pipeline(options: &MailjetOptions) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic();

    for (field, value) in [
        (API_KEY_FIELD, &options.mailjet_api_key_field),
        (PRIVATE_KEY_FIELD, &options.mailjet_private_key_field),
    ] {
        match value {
            Some(v) => pipe.hset(OPTIONS_KEY, field, v).ignore(),
            None => pipe.hdel(OPTIONS_KEY, field).ignore(),
        };
    }

    pipe
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn get_options(&self) -> Result<MailjetOptions> {
        let mut conn = self.pool.get().await?;

        let (api_key, private_key): (Option<String>, Option<String>) = redis::cmd("HMGET")
            .arg(OPTIONS_KEY)
            .arg(API_KEY_FIELD)
            .arg(PRIVATE_KEY_FIELD)
            .query_async(&mut *conn)
            .await?;

        Ok(MailjetOptions {
            mailjet_api_key_field: api_key,
            mailjet_private_key_field: private_key,
        })
    }

    async fn save_options(&self, options: &MailjetOptions) -> Result<()> {
        let mut conn = self.pool.get().await?;

        save_pipeline(options)
            .query_async::<()>(&mut *conn)
            .await?;

        tracing::info!("Mailjet options saved");
        Ok(())
    }

    /// Check Redis connection health
    async fn health_check(&self) -> Result<bool> {
        let mut conn = self.pool.get().await?;

        let pong: String = redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        Ok(pong == "PONG")
    }
}
