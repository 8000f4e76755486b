//! WebhookVerifier port for authenticating inbound payment webhooks.

use crate::domain::licensing::{StripeEvent, WebhookError};

/// Verifies that a raw webhook payload was sent by the payment processor.
///
/// Verification is local and synchronous: it needs only the exact request
/// bytes, the signature header, and the configured signing secret.
pub trait WebhookVerifier: Send + Sync {
    /// Checks the signature over `payload` and parses the event envelope.
    ///
    /// Returns a verification-class `WebhookError` when the payload cannot
    /// be trusted.
    fn verify_event(&self, payload: &[u8], signature: &str) -> Result<StripeEvent, WebhookError>;
}
