//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors)
//! - `licensing` - Stripe webhook events, signature verification, pro license grants

pub mod foundation;
pub mod licensing;
