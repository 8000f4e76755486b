//! HandleCheckoutWebhookHandler - Command handler for Stripe checkout webhooks.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::licensing::{
    CheckoutSession, ProLicense, StripeEvent, StripeEventType, WebhookError,
};
use crate::ports::{Clock, ProfileStore, WebhookVerifier};

/// Command to handle a payment webhook.
#[derive(Debug, Clone)]
pub struct HandleCheckoutWebhookCommand {
    /// Raw webhook payload, byte-for-byte as received.
    pub payload: Vec<u8>,
    /// Stripe-Signature header, if the caller sent one.
    pub signature: Option<String>,
}

/// Result of webhook processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleCheckoutWebhookResult {
    /// Checkout completed, profile upgraded to pro.
    LicenseActivated {
        event_id: String,
        email: String,
        license_expiry: Timestamp,
    },
    /// Verified event of a type this service does not act on.
    Ignored { event_id: String, event_type: String },
    /// Checkout completed without a usable purchaser email. Nothing to update.
    NoPurchaserEmail { event_id: String },
}

/// Handler for processing Stripe webhooks.
///
/// Verifies the delivery, then grants a one-year pro license to the
/// purchaser's profile when the event is a completed checkout.
pub struct HandleCheckoutWebhookHandler {
    verifier: Arc<dyn WebhookVerifier>,
    profile_store: Arc<dyn ProfileStore>,
    clock: Arc<dyn Clock>,
}

impl HandleCheckoutWebhookHandler {
    pub fn new(
        verifier: Arc<dyn WebhookVerifier>,
        profile_store: Arc<dyn ProfileStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            verifier,
            profile_store,
            clock,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleCheckoutWebhookCommand,
    ) -> Result<HandleCheckoutWebhookResult, WebhookError> {
        // 1. Verify webhook signature and parse event
        let signature = cmd.signature.ok_or_else(|| {
            tracing::warn!(payload_len = cmd.payload.len(), "Webhook delivery without signature");
            WebhookError::MissingSignature
        })?;
        let event = self.verifier.verify_event(&cmd.payload, &signature)?;

        // 2. Dispatch on event type
        match event.parsed_type() {
            StripeEventType::CheckoutSessionCompleted => self.handle_checkout_completed(event).await,
            StripeEventType::Other => {
                tracing::debug!(
                    event_id = %event.id,
                    event_type = %event.event_type,
                    "Ignoring unhandled webhook event type"
                );
                Ok(HandleCheckoutWebhookResult::Ignored {
                    event_id: event.id,
                    event_type: event.event_type,
                })
            }
        }
    }

    async fn handle_checkout_completed(
        &self,
        event: StripeEvent,
    ) -> Result<HandleCheckoutWebhookResult, WebhookError> {
        let session: CheckoutSession = match event.deserialize_object() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(event_id = %event.id, error = %e, "Malformed checkout session");
                return Ok(HandleCheckoutWebhookResult::NoPurchaserEmail { event_id: event.id });
            }
        };
        let email = match session.customer_email() {
            Ok(email) => email.to_string(),
            Err(e) => {
                tracing::warn!(
                    event_id = %event.id,
                    session_id = ?session.id,
                    error = %e,
                    "Checkout session without purchaser email"
                );
                return Ok(HandleCheckoutWebhookResult::NoPurchaserEmail { event_id: event.id });
            }
        };

        tracing::info!(
            event_id = %event.id,
            session_id = ?session.id,
            email = %email,
            "Payment received"
        );

        // 3. Grant the license from the moment of processing
        let license = ProLicense::granted_at(self.clock.now())?;

        if let Err(e) = self.profile_store.update_by_email(&email, &license).await {
            tracing::error!(
                event_id = %event.id,
                email = %email,
                error = %e,
                "Failed to update profile"
            );
            return Err(e.into());
        }

        tracing::info!(
            event_id = %event.id,
            email = %email,
            license_expiry = %license.license_expiry,
            "Profile upgraded to pro"
        );

        Ok(HandleCheckoutWebhookResult::LicenseActivated {
            event_id: event.id,
            email,
            license_expiry: license.license_expiry,
        })
    }
}
