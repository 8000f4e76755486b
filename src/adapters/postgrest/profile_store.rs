//! PostgREST implementation of ProfileStore.
//!
//! Issues `PATCH {url}/rest/v1/{table}?email=eq.{email}` authenticated with
//! the service-role key, so row-level security does not apply.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;
use crate::domain::licensing::ProLicense;
use crate::ports::ProfileStore;

/// PostgREST implementation of the ProfileStore port.
pub struct PostgrestProfileStore {
    client: reqwest::Client,
    base_url: String,
    service_role_key: SecretString,
    table: String,
}

impl PostgrestProfileStore {
    /// Creates a store against `base_url` (the project URL, without `/rest/v1`).
    pub fn new(
        base_url: impl Into<String>,
        service_role_key: SecretString,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_role_key,
            table: table.into(),
        }
    }

    /// Builds the store from validated database configuration.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let key = config.service_role_key.clone().ok_or_else(|| {
            DomainError::external_service("service role key is required for the REST backend")
        })?;
        Ok(Self::new(config.url.clone(), key, config.profiles_table.clone()))
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ProfileStore for PostgrestProfileStore {
    async fn update_by_email(&self, email: &str, license: &ProLicense) -> Result<(), DomainError> {
        let key = self.service_role_key.expose_secret();
        let body = json!({
            "is_pro": license.is_pro,
            "license_expiry": license.license_expiry.to_rfc3339_millis(),
        });

        let response = self
            .client
            .patch(self.table_url())
            .query(&[("email", format!("eq.{}", email))])
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::external_service(format!("Record store request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %text, "Record store rejected update");
            return Err(
                DomainError::external_service("Record store rejected profile update")
                    .with_detail("status", status.as_u16().to_string())
                    .with_detail("body", text),
            );
        }

        tracing::debug!(status = status.as_u16(), table = %self.table, "Profile update accepted");
        Ok(())
    }
}
