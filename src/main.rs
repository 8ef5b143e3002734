use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mailjet_relay::api;
use mailjet_relay::config::Config;
use mailjet_relay::mail::MailjetClient;
use mailjet_relay::redis::{create_pool, SettingsRepository};
use mailjet_relay::settings::{seed_credentials, MemorySettingsStore, SettingsStore};
use mailjet_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Mailjet relay...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        host = %config.server_host,
        port = %config.server_port,
        "Configuration loaded"
    );

    // Settings store: Redis when configured, process memory otherwise
    let settings: Arc<dyn SettingsStore> = match &config.redis_url {
        Some(url) => {
            let repo = SettingsRepository::new(create_pool(url)?);
            match repo.health_check().await {
                Ok(true) => tracing::info!("Redis connection established"),
                Ok(false) => tracing::warn!("Redis health check returned false"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to Redis");
                    // Continue anyway, might recover later
                }
            }
            Arc::new(repo)
        }
        None => {
            tracing::warn!("REDIS_URL not set, settings are kept in memory only");
            Arc::new(MemorySettingsStore::new())
        }
    };

    if let Err(e) = seed_credentials(
        settings.as_ref(),
        config.mailjet_api_key.as_deref(),
        config.mailjet_private_key.as_deref(),
    )
    .await
    {
        tracing::error!(error = %e, "Failed to seed Mailjet credentials");
    }

    let transport = Arc::new(MailjetClient::from_config(&config));
    tracing::info!(endpoint = %transport.endpoint(), "Mailjet client ready");

    let state = AppState::new(settings, transport);

    // Build router
    let app = api::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Handle shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down...");
        },
    }
}
