//! Database configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Which record-store adapter backs profile updates.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseBackend {
    /// Hosted PostgREST endpoint (`{url}/rest/v1/...`)
    #[default]
    Rest,
    /// Direct PostgreSQL connection
    Postgres,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Project URL (rest) or PostgreSQL connection URL (postgres)
    pub url: String,

    /// Service-role key sent as `apikey` and bearer token (rest only)
    pub service_role_key: Option<SecretString>,

    /// Adapter selection
    #[serde(default)]
    pub backend: DatabaseBackend,

    /// Table holding user profiles
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,

    /// Minimum connections to maintain
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !is_valid_table_name(&self.profiles_table) {
            return Err(ValidationError::InvalidTableName);
        }

        match self.backend {
            DatabaseBackend::Rest => {
                if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
                    return Err(ValidationError::InvalidDatabaseUrl);
                }
                let has_key = self
                    .service_role_key
                    .as_ref()
                    .is_some_and(|k| !k.expose_secret().is_empty());
                if !has_key {
                    return Err(ValidationError::MissingRequired("DATABASE_SERVICE_ROLE_KEY"));
                }
            }
            DatabaseBackend::Postgres => {
                if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
                    return Err(ValidationError::InvalidDatabaseUrl);
                }
                if self.min_connections > self.max_connections {
                    return Err(ValidationError::InvalidPoolSize);
                }
                if self.max_connections > 100 {
                    return Err(ValidationError::PoolSizeTooLarge);
                }
            }
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: None,
            backend: DatabaseBackend::default(),
            profiles_table: default_profiles_table(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
        }
    }
}

// Interpolated into SQL and URL paths, so restrict to plain identifiers.
fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit())
}

fn default_profiles_table() -> String {
    "profiles".to_string()
}

fn default_min_connections() -> u32 {
    5
}

fn default_max_connections() -> u32 {
    20
}

fn default_acquire_timeout() -> u64 {
    30
}
