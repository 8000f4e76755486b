//! Stripe payment processor adapter.
//!
//! Implements the `WebhookVerifier` port for Stripe webhook deliveries.
//!
//! # Security
//!
//! - Webhook signatures use HMAC-SHA256 with constant-time comparison
//! - Timestamps are validated to prevent replay attacks (5-minute window)
//! - All secrets are handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! Required environment variables:
//! - `LICENSE_WEBHOOK__PAYMENT__STRIPE_API_KEY`: Stripe secret API key
//! - `LICENSE_WEBHOOK__PAYMENT__STRIPE_WEBHOOK_SECRET`: Webhook signing secret (whsec_...)

mod stripe_adapter;

pub use stripe_adapter::{StripeConfig, StripeWebhookAdapter};
