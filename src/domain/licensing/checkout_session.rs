//! Checkout session payload carried by `checkout.session.completed` events.

use serde::Deserialize;

use crate::domain::foundation::ValidationError;

/// The subset of a Stripe checkout session this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Checkout session ID (cs_xxx format).
    #[serde(default)]
    pub id: Option<String>,

    /// Details the customer entered during checkout.
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
}

/// Customer details collected by Stripe Checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

impl CheckoutSession {
    /// Returns the purchaser's email address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the session carries no
    /// customer details, no email, or an empty one.
    pub fn customer_email(&self) -> Result<&str, ValidationError> {
        self.customer_details
            .as_ref()
            .and_then(|details| details.email.as_deref())
            .filter(|email| !email.is_empty())
            .ok_or_else(|| ValidationError::empty_field("customer_details.email"))
    }
}
