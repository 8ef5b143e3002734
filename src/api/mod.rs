pub mod health;
pub mod mail;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .merge(health::health_routes())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/mail", mail::mail_routes())
        .nest("/settings", settings::settings_routes())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::mail::{EmailTransport, SendError, TransportResponse};
    use crate::models::{ApiKeys, EmailPayload, MailjetOptions};
    use crate::settings::{MemorySettingsStore, SettingsStore};

    struct CountingTransport {
        response: TransportResponse,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EmailTransport for CountingTransport {
        async fn send(
            &self,
            _keys: ApiKeys<'_>,
            _payload: &EmailPayload,
        ) -> Result<TransportResponse, SendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    async fn setup(
        options: MailjetOptions,
        response: TransportResponse,
    ) -> (Router, Arc<CountingTransport>) {
        let store = Arc::new(MemorySettingsStore::new());
        store.save_options(&options).await.unwrap();

        let transport = Arc::new(CountingTransport {
            response,
            calls: AtomicUsize::new(0),
        });

        let state = AppState::new(store, transport.clone());
        (create_router(state), transport)
    }

    fn configured() -> MailjetOptions {
        MailjetOptions {
            mailjet_api_key_field: Some("key".to_string()),
            mailjet_private_key_field: Some("secret".to_string()),
        }
    }

    async fn call(router: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn mail_body() -> Value {
        json!({
            "to": "jane@example.com",
            "subject": "Hello",
            "message": "<p>Hi</p>",
            "headers": ["From: Shop <shop@example.com>"]
        })
    }

    #[tokio::test]
    async fn test_mail_sent() {
        let (router, transport) = setup(configured(), TransportResponse::ok()).await;

        let (status, body) = call(router, Method::POST, "/api/v1/mail", mail_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"sent": true}));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mail_without_keys() {
        let (router, transport) =
            setup(MailjetOptions::default(), TransportResponse::ok()).await;

        let (status, body) = call(router, Method::POST, "/api/v1/mail", mail_body()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body["error"],
            "Error sending mail: Mailjet API/private key not set"
        );
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mail_rejected() {
        let (router, _) = setup(configured(), TransportResponse::failed("Unauthorized")).await;

        let (status, body) = call(router, Method::POST, "/api/v1/mail", mail_body()).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Error sending mail: Unauthorized");
    }

    #[tokio::test]
    async fn test_update_and_read_settings() {
        let (router, _) = setup(MailjetOptions::default(), TransportResponse::ok()).await;

        let (status, body) = call(
            router.clone(),
            Method::PUT,
            "/api/v1/settings",
            json!({
                "mailjet_api_key_field": "  key\n",
                "mailjet_private_key_field": "<b>secret</b>"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Settings Saved");
        assert_eq!(body["settings"]["mailjet_private_key_field"], "********");

        let (status, body) = call(router, Method::GET, "/api/v1/settings", Value::Null).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "mailjet_api_key_field": "key",
                "mailjet_private_key_field": "********"
            })
        );
    }

    #[tokio::test]
    async fn test_settings_never_expose_private_key() {
        let (router, transport) = setup(
            MailjetOptions {
                mailjet_api_key_field: Some("key".to_string()),
                mailjet_private_key_field: Some("0123456789abcdef".to_string()),
            },
            TransportResponse::ok(),
        )
        .await;

        let (status, body) = call(router.clone(), Method::GET, "/api/v1/settings", Value::Null).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mailjet_private_key_field"], "********cdef");

        // The stored key itself is unchanged and still used for sending
        let (status, _) = call(router, Method::POST, "/api/v1/mail", mail_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = setup(configured(), TransportResponse::ok()).await;

        let (status, body) = call(router, Method::GET, "/health", Value::Null).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["credentials"], "configured");
    }
}
