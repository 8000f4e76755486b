//! Stripe webhook adapter.
//!
//! Implements the `WebhookVerifier` port for Stripe deliveries.
//!
//! # Security
//!
//! - HMAC-SHA256 signature verification with constant-time comparison
//! - Timestamp validation (5-minute window) for replay attack prevention
//! - Secrets handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key, webhook_secret);
//! let adapter = StripeWebhookAdapter::new(config);
//! ```

use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::domain::licensing::{StripeEvent, StripeWebhookVerifier, WebhookError};
use crate::ports::WebhookVerifier;

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Webhook signing secret (whsec_...).
    webhook_secret: SecretString,

    /// Whether to reject test mode events.
    require_livemode: bool,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(api_key: impl Into<String>, webhook_secret: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            webhook_secret: SecretString::new(webhook_secret.into()),
            require_livemode: false,
        }
    }

    /// Build from the loaded application configuration.
    pub fn from_payment_config(config: &PaymentConfig) -> Self {
        Self {
            api_key: config.stripe_api_key.clone(),
            webhook_secret: config.stripe_webhook_secret.clone(),
            require_livemode: config.require_livemode,
        }
    }

    /// Require livemode events.
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }

    /// Check if the API key is a test mode key.
    pub fn is_test_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("sk_test_")
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("test_mode", &self.is_test_mode())
            .field("require_livemode", &self.require_livemode)
            .finish_non_exhaustive()
    }
}

/// Stripe webhook adapter.
///
/// Implements `WebhookVerifier` for Stripe-signed deliveries.
pub struct StripeWebhookAdapter {
    verifier: StripeWebhookVerifier,
    require_livemode: bool,
}

impl StripeWebhookAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        if config.is_test_mode() {
            tracing::info!("Stripe configured with a test mode key");
        }
        Self {
            verifier: StripeWebhookVerifier::new(config.webhook_secret),
            require_livemode: config.require_livemode,
        }
    }
}

impl WebhookVerifier for StripeWebhookAdapter {
    fn verify_event(&self, payload: &[u8], signature: &str) -> Result<StripeEvent, WebhookError> {
        let event = self
            .verifier
            .verify_and_parse(payload, signature)
            .map_err(|e| {
                tracing::warn!(error = %e, payload_len = payload.len(), "Webhook verification failed");
                e
            })?;

        if self.require_livemode && !event.is_live() {
            tracing::warn!(event_id = %event.id, "Rejected test mode event");
            return Err(WebhookError::TestModeEvent);
        }

        tracing::info!(
            event_id = %event.id,
            event_type = %event.event_type,
            livemode = event.livemode,
            "Webhook signature verified"
        );

        Ok(event)
    }
}
