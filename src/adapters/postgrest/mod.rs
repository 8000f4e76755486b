//! PostgREST adapters - record store access over the hosted REST interface.
//!
//! - `PostgrestProfileStore` - Partial profile updates keyed by email

mod profile_store;

pub use profile_store::PostgrestProfileStore;
