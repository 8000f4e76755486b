//! License Webhook service
//!
//! ## Endpoints
//!
//! - `POST /api/webhooks/stripe` - Stripe webhook handler (path configurable)

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use license_webhook::adapters::http::{build_router, WebhookAppState};
use license_webhook::adapters::postgres::{connect_pool, PostgresProfileStore};
use license_webhook::adapters::{PostgrestProfileStore, StripeConfig, StripeWebhookAdapter};
use license_webhook::config::{AppConfig, DatabaseBackend, LogFormat, ServerConfig};
use license_webhook::ports::{ProfileStore, SystemClock};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (reads .env if present)
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.server)?;

    config.validate().context("invalid configuration")?;
    tracing::info!(
        environment = ?config.server.environment,
        backend = ?config.database.backend,
        webhook_path = %config.server.webhook_path,
        "Configuration loaded"
    );

    let stripe = StripeConfig::from_payment_config(&config.payment);
    if config.is_production() && stripe.is_test_mode() {
        tracing::warn!("Production environment is using a Stripe test mode key");
    }

    let profile_store: Arc<dyn ProfileStore> = match config.database.backend {
        DatabaseBackend::Rest => Arc::new(PostgrestProfileStore::from_config(&config.database)?),
        DatabaseBackend::Postgres => {
            let pool = connect_pool(&config.database)?;
            tracing::info!("Database pool created");
            Arc::new(PostgresProfileStore::new(pool, &config.database.profiles_table))
        }
    };

    let state = WebhookAppState {
        verifier: Arc::new(StripeWebhookAdapter::new(stripe)),
        profile_store,
        clock: Arc::new(SystemClock),
    };

    let app = build_router(
        state,
        &config.server.webhook_path,
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&server.log_level))
        .context("invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
