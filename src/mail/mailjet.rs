use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::mail::SendError;
use crate::models::{ApiKeys, EmailPayload};

/// Outcome reported by the provider for one send call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub success: bool,
    pub reason_phrase: String,
}

impl TransportResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            reason_phrase: "OK".to_string(),
        }
    }

    pub fn failed(reason_phrase: impl Into<String>) -> Self {
        Self {
            success: false,
            reason_phrase: reason_phrase.into(),
        }
    }
}

/// Something that can hand an [`EmailPayload`] to the provider
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(
        &self,
        keys: ApiKeys<'_>,
        payload: &EmailPayload,
    ) -> Result<TransportResponse, SendError>;
}

/// Mailjet send API client
#[derive(Clone)]
pub struct MailjetClient {
    client: Client,
    endpoint: String,
}

impl MailjetClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.send_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailTransport for MailjetClient {
    async fn send(
        &self,
        keys: ApiKeys<'_>,
        payload: &EmailPayload,
    ) -> Result<TransportResponse, SendError> {
        let res = self
            .client
            .post(&self.endpoint)
            .basic_auth(keys.api_key, Some(keys.private_key))
            .json(payload)
            .send()
            .await
            .map_err(|e| SendError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            return Ok(TransportResponse::ok());
        }

        let body = res.text().await.unwrap_or_default();
        tracing::debug!(status = %status, body = %body, "Mailjet rejected message");

        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());

        Ok(TransportResponse::failed(reason))
    }
}
