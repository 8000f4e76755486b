//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WebhookVerifier` - Payment processor signature verification
//! - `ProfileStore` - Record store holding user profiles
//! - `Clock` - Current time

mod clock;
mod profile_store;
mod webhook_verifier;

pub use clock::{Clock, FixedClock, SystemClock};
pub use profile_store::ProfileStore;
pub use webhook_verifier::WebhookVerifier;
