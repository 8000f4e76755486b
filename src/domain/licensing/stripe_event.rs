//! Stripe webhook event types.
//!
//! Defines the envelope for Stripe webhook payloads.
//! Only fields relevant to our processing are captured.

use serde::{Deserialize, Serialize};

/// Stripe webhook event (simplified).
///
/// Contains the envelope fields needed for dispatch. The event-specific
/// object stays as raw JSON until a handler asks for a typed view of it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: StripeEventData,

    /// Whether this is a live mode event (vs test mode).
    #[serde(default)]
    pub livemode: bool,

    /// API version used to render this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// Container for event-specific data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEventData {
    /// The object that triggered the event (polymorphic based on event type).
    pub object: serde_json::Value,
}

impl StripeEvent {
    /// Returns true if this is a live mode event.
    pub fn is_live(&self) -> bool {
        self.livemode
    }

    /// Attempts to deserialize the data object as the specified type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data.object)
    }

    /// Parse the event type into a known enum variant.
    pub fn parsed_type(&self) -> StripeEventType {
        StripeEventType::parse(&self.event_type)
    }
}

/// Stripe event types this service distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeEventType {
    /// Checkout session completed successfully.
    CheckoutSessionCompleted,
    /// Any other event type. Acknowledged without action.
    Other,
}

impl StripeEventType {
    /// Parse event type from string.
    pub fn parse(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            _ => Self::Other,
        }
    }
}

/// Builder for creating test StripeEvent instances.
#[cfg(test)]
pub struct StripeEventBuilder {
    id: String,
    event_type: String,
    created: i64,
    object: serde_json::Value,
    livemode: bool,
}

#[cfg(test)]
impl Default for StripeEventBuilder {
    fn default() -> Self {
        Self {
            id: "evt_test_123".to_string(),
            event_type: "checkout.session.completed".to_string(),
            created: chrono::Utc::now().timestamp(),
            object: serde_json::json!({}),
            livemode: false,
        }
    }
}

#[cfg(test)]
impl StripeEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn object(mut self, object: serde_json::Value) -> Self {
        self.object = object;
        self
    }

    pub fn livemode(mut self, livemode: bool) -> Self {
        self.livemode = livemode;
        self
    }

    pub fn build(self) -> StripeEvent {
        StripeEvent {
            id: self.id,
            event_type: self.event_type,
            created: self.created,
            data: StripeEventData {
                object: self.object,
            },
            livemode: self.livemode,
            api_version: Some("2023-10-16".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ══════════════════════════════════════════════════════════════
    // StripeEvent Deserialization Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn deserialize_minimal_event() {
        let json = r#"{
            "id": "evt_1234567890",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {
                "object": {}
            },
            "livemode": false,
            "api_version": "2023-10-16"
        }"#;

        let event: StripeEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "evt_1234567890");
        assert_eq!(event.event_type, "checkout.session.completed");
        assert_eq!(event.created, 1704067200);
        assert!(!event.livemode);
        assert_eq!(event.api_version.as_deref(), Some("2023-10-16"));
    }

    #[test]
    fn deserialize_event_without_optional_fields() {
        let json = r#"{
            "id": "evt_no_version",
            "type": "invoice.paid",
            "created": 1704067200,
            "data": {"object": {"id": "in_1"}}
        }"#;

        let event: StripeEvent = serde_json::from_str(json).unwrap();

        assert!(!event.is_live());
        assert!(event.api_version.is_none());
        assert_eq!(event.data.object["id"], "in_1");
    }

    #[test]
    fn deserialize_event_ignores_unknown_envelope_fields() {
        let json = r#"{
            "id": "evt_extra",
            "object": "event",
            "type": "checkout.session.completed",
            "created": 1704067200,
            "data": {"object": {}, "previous_attributes": {"status": "open"}},
            "livemode": true,
            "pending_webhooks": 2,
            "request": {"id": null, "idempotency_key": null}
        }"#;

        let event: StripeEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "evt_extra");
        assert!(event.is_live());
    }

    #[test]
    fn deserialize_event_missing_data_fails() {
        let json = r#"{"id": "evt_test", "type": "checkout.session.completed", "created": 1}"#;

        let result: Result<StripeEvent, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn deserialize_object_to_custom_type() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Session {
            id: String,
            customer: String,
        }

        let event = StripeEventBuilder::new()
            .object(json!({
                "id": "cs_test_abc123",
                "customer": "cus_xyz789"
            }))
            .build();

        let session: Session = event.deserialize_object().unwrap();
        assert_eq!(session.id, "cs_test_abc123");
        assert_eq!(session.customer, "cus_xyz789");
    }

    #[test]
    fn deserialize_object_fails_for_wrong_type() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Invoice {
            amount_due: i64,
        }

        let event = StripeEventBuilder::new()
            .object(json!({
                "id": "cs_test",
                "status": "complete"
            }))
            .build();

        let result: Result<Invoice, _> = event.deserialize_object();
        assert!(result.is_err());
    }

    // ══════════════════════════════════════════════════════════════
    // StripeEventType Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn event_type_parse_checkout_completed() {
        assert_eq!(
            StripeEventType::parse("checkout.session.completed"),
            StripeEventType::CheckoutSessionCompleted
        );
    }

    #[test]
    fn event_type_parse_is_exact_match() {
        assert_eq!(
            StripeEventType::parse("checkout.session.expired"),
            StripeEventType::Other
        );
        assert_eq!(
            StripeEventType::parse("Checkout.Session.Completed"),
            StripeEventType::Other
        );
        assert_eq!(StripeEventType::parse(""), StripeEventType::Other);
    }

    #[test]
    fn parsed_type_returns_correct_variant() {
        let event = StripeEventBuilder::new()
            .event_type("invoice.payment_failed")
            .build();

        assert_eq!(event.parsed_type(), StripeEventType::Other);
    }
}
