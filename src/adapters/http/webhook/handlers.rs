//! HTTP handlers for the Stripe webhook endpoint.
//!
//! These handlers connect Axum routes to the application layer command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::licensing::{
    HandleCheckoutWebhookCommand, HandleCheckoutWebhookHandler,
};
use crate::domain::licensing::WebhookError;
use crate::ports::{Clock, ProfileStore, WebhookVerifier};

use super::dto::{ErrorResponse, ReceivedResponse};

/// Header carrying Stripe's webhook signature.
pub const STRIPE_SIGNATURE_HEADER: &str = "Stripe-Signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct WebhookAppState {
    pub verifier: Arc<dyn WebhookVerifier>,
    pub profile_store: Arc<dyn ProfileStore>,
    pub clock: Arc<dyn Clock>,
}

impl WebhookAppState {
    /// Create the handler on demand from the shared state.
    pub fn webhook_handler(&self) -> HandleCheckoutWebhookHandler {
        HandleCheckoutWebhookHandler::new(
            self.verifier.clone(),
            self.profile_store.clone(),
            self.clock.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/stripe - Handle Stripe webhook events
pub async fn handle_stripe_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    let signature = headers
        .get(STRIPE_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let cmd = HandleCheckoutWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    state.webhook_handler().handle(cmd).await?;

    Ok(Json(ReceivedResponse::received()))
}

/// Any other method on the webhook path.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method Not Allowed",
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        if self.0.is_verification_failure() {
            tracing::debug!(status = status.as_u16(), "Rejected unverified webhook delivery");
        }
        if status.is_server_error() {
            return (status, Json(ErrorResponse::new("Failed to update database"))).into_response();
        }
        (status, format!("Webhook Error: {}", self.0)).into_response()
    }
}
