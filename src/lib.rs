//! License Webhook - Stripe checkout to pro license service
//!
//! Receives signed Stripe webhook deliveries and, for completed checkouts,
//! marks the purchaser's profile as pro for one calendar year.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
