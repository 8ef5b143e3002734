use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;
use crate::models::MailjetOptions;
use crate::settings::SettingsStore;

const API_KEY_FIELD: &str = "mailjet_api_key_field";
const PRIVATE_KEY_FIELD: &str = "mailjet_private_key_field";

/// Process-local store, used when no Redis is configured
#[derive(Default)]
pub struct MemorySettingsStore {
    fields: DashMap<&'static str, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_options(&self) -> Result<MailjetOptions> {
        Ok(MailjetOptions {
            mailjet_api_key_field: self.fields.get(API_KEY_FIELD).map(|v| v.value().clone()),
            mailjet_private_key_field: self.fields.get(PRIVATE_KEY_FIELD).map(|v| v.value().clone()),
        })
    }

    async fn save_options(&self, options: &MailjetOptions) -> Result<()> {
        for (field, value) in [
            (API_KEY_FIELD, &options.mailjet_api_key_field),
            (PRIVATE_KEY_FIELD, &options.mailjet_private_key_field),
        ] {
            match value {
                Some(v) => {
                    self.fields.insert(field, v.clone());
                }
                None => {
                    self.fields.remove(field);
                }
            }
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}
