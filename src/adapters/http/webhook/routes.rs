//! Axum router configuration for the webhook endpoint.

use axum::{routing::post, Router};

use super::handlers::{handle_stripe_webhook, method_not_allowed, WebhookAppState};

/// Create the Stripe webhook routes.
///
/// Webhooks don't carry user authentication; they're verified via signature.
///
/// # Routes
/// - `POST {path}` - Handle Stripe webhooks
/// - any other method on `{path}` - 405 with `Allow: POST`
pub fn webhook_routes(path: &str) -> Router<WebhookAppState> {
    Router::new().route(path, post(handle_stripe_webhook).fallback(method_not_allowed))
}

/// Create the complete webhook router with state applied.
///
/// # Example
///
/// ```ignore
/// let app = webhook_router("/api/webhooks/stripe", app_state)
///     .layer(TraceLayer::new_for_http());
/// ```
pub fn webhook_router(path: &str, state: WebhookAppState) -> Router {
    webhook_routes(path).with_state(state)
}
