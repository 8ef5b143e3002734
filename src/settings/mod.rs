//! Storage for the Mailjet credentials edited from the admin settings endpoint

pub mod memory;
pub mod sanitize;

pub use memory::MemorySettingsStore;
pub use sanitize::sanitize_text_field;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Credentials, MailjetOptions};

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current options; fields never saved are `None`
    async fn get_options(&self) -> Result<MailjetOptions>;

    async fn save_options(&self, options: &MailjetOptions) -> Result<()>;

    async fn health_check(&self) -> Result<bool>;

    async fn get_credentials(&self) -> Result<Credentials> {
        Ok(self.get_options().await?.into())
    }
}

/// Write `api_key`/`private_key` into `store` unless both are already set.
pub async fn seed_credentials(
    store: &dyn SettingsStore,
    api_key: Option<&str>,
    private_key: Option<&str>,
) -> Result<bool> {
    let (Some(api_key), Some(private_key)) = (api_key, private_key) else {
        return Ok(false);
    };

    if store.get_credentials().await?.keys().is_some() {
        return Ok(false);
    }

    store
        .save_options(&MailjetOptions {
            mailjet_api_key_field: Some(sanitize_text_field(api_key)),
            mailjet_private_key_field: Some(sanitize_text_field(private_key)),
        })
        .await?;

    tracing::info!("Seeded Mailjet credentials from environment");
    Ok(true)
}
