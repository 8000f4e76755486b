//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum webhook endpoint
//! - `stripe` - Stripe webhook signature verification
//! - `postgrest` - Profile updates over the managed database REST API
//! - `postgres` - Profile updates over a direct PostgreSQL connection

pub mod http;
pub mod postgres;
pub mod postgrest;
pub mod stripe;

pub use postgres::PostgresProfileStore;
pub use postgrest::PostgrestProfileStore;
pub use stripe::{StripeConfig, StripeWebhookAdapter};
