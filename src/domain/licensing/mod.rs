//! Licensing domain module.
//!
//! Turns verified Stripe checkout events into pro license grants.
//!
//! # Module Structure
//!
//! - `stripe_event` - Webhook envelope and event type dispatch
//! - `checkout_session` - Checkout session payload (purchaser email)
//! - `webhook_verifier` - Stripe-Signature parsing and HMAC verification
//! - `webhook_errors` - Error conditions and their HTTP status mapping
//! - `pro_license` - License grant and expiry arithmetic

mod checkout_session;
mod pro_license;
mod stripe_event;
mod webhook_errors;
mod webhook_verifier;

pub use checkout_session::{CheckoutSession, CustomerDetails};
pub use pro_license::{ProLicense, LICENSE_TERM_YEARS};
pub use stripe_event::{StripeEvent, StripeEventData, StripeEventType};
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{signature_header_for, SignatureHeader, StripeWebhookVerifier};

#[cfg(test)]
pub(crate) use stripe_event::StripeEventBuilder;
