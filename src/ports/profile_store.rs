//! ProfileStore port for the external record store holding user profiles.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::licensing::ProLicense;

/// Partial updates of existing profile records.
///
/// Implementations never create records. Matching zero records is a
/// successful no-op, not an error.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Sets the license fields on every profile whose `email` equals `email`.
    async fn update_by_email(&self, email: &str, license: &ProLicense) -> Result<(), DomainError>;
}
