//! HTTP adapter for the Stripe webhook endpoint.
//!
//! # Module Structure
//!
//! - `dto` - JSON response bodies
//! - `handlers` - Axum handler, app state and error mapping
//! - `routes` - Router configuration

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, ReceivedResponse};
pub use handlers::{
    handle_stripe_webhook, method_not_allowed, WebhookApiError, WebhookAppState,
    STRIPE_SIGNATURE_HEADER,
};
pub use routes::{webhook_router, webhook_routes};
