//! HTTP adapters - REST API implementations.

pub mod webhook;

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

// Re-export key types for convenience
pub use webhook::{webhook_router, WebhookAppState};

/// Build the service router with request tracing and a timeout.
pub fn build_router(state: WebhookAppState, webhook_path: &str, request_timeout: Duration) -> Router {
    // Order matters - outermost first
    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(request_timeout));

    webhook_router(webhook_path, state).layer(middleware)
}
