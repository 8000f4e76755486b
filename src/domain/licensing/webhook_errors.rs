//! Webhook error types for Stripe webhook handling.
//!
//! Defines every error condition of webhook processing with its HTTP
//! status code mapping. Verification failures are the caller's fault (400);
//! persistence failures are ours (500).

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The Stripe-Signature header was not sent.
    #[error("No Stripe-Signature header value was provided")]
    MissingSignature,

    /// Failed to parse webhook payload or signature header.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Webhook signature verification failed.
    #[error("No signatures found matching the expected signature for payload")]
    InvalidSignature,

    /// Webhook timestamp is older than the tolerance window (5 minutes).
    #[error("Timestamp outside the tolerance zone")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("Timestamp is in the future")]
    InvalidTimestamp,

    /// Test-mode event received while live mode is required.
    #[error("Test mode events are not accepted")]
    TestModeEvent,

    /// Record store update failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl WebhookError {
    /// Returns true if the payload could not be trusted as a Stripe event.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            WebhookError::MissingSignature
                | WebhookError::ParseError(_)
                | WebhookError::InvalidSignature
                | WebhookError::TimestampOutOfRange
                | WebhookError::InvalidTimestamp
                | WebhookError::TestModeEvent
        )
    }

    /// Maps the error to an appropriate HTTP status code.
    ///
    /// Stripe retries delivery on any non-2xx response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSignature
            | WebhookError::ParseError(_)
            | WebhookError::InvalidSignature
            | WebhookError::TimestampOutOfRange
            | WebhookError::InvalidTimestamp
            | WebhookError::TestModeEvent => StatusCode::BAD_REQUEST,

            WebhookError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for WebhookError {
    fn from(err: DomainError) -> Self {
        WebhookError::Database(err.to_string())
    }
}
