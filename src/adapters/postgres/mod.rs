//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProfileStore` - Direct `UPDATE` of profile license columns

mod profile_store;

pub use profile_store::{connect_pool, PostgresProfileStore};
