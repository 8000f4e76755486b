//! Configuration for the license webhook service.
//!
//! Everything comes from `LICENSE_WEBHOOK__<SECTION>__<KEY>` environment
//! variables, optionally seeded from a `.env` file. Three sections:
//!
//! - `server`: bind address, environment, log level and format, request
//!   timeout, and the path Stripe posts to (default `/api/webhooks/stripe`).
//!   Every key has a default.
//! - `database`: which record store to write to (`rest` for PostgREST,
//!   `postgres` for a direct connection), its URL, the service-role key
//!   PostgREST needs, and the profiles table (default `profiles`).
//! - `payment`: the Stripe API key, the `whsec_` signing secret, and
//!   whether test-mode events are refused.
//!
//! # Example
//!
//! ```no_run
//! use license_webhook::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Webhook mounted at {}", config.server.webhook_path);
//! ```

mod database;
mod error;
mod payment;
mod server;

pub use database::{DatabaseBackend, DatabaseConfig};
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, webhook path)
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store configuration (PostgREST or PostgreSQL)
    pub database: DatabaseConfig,

    /// Payment configuration (Stripe)
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Reads the service configuration from the environment.
    ///
    /// A `.env` file in the working directory is applied first, without
    /// overriding variables already set. The `server` section may be
    /// omitted entirely.
    ///
    /// - `LICENSE_WEBHOOK__DATABASE__URL=https://xyz.supabase.co` -> `database.url`
    /// - `LICENSE_WEBHOOK__DATABASE__BACKEND=postgres` -> `database.backend`
    /// - `LICENSE_WEBHOOK__PAYMENT__STRIPE_WEBHOOK_SECRET=whsec_...` -> `payment.stripe_webhook_secret`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL or either Stripe key is
    /// absent, or a value does not parse (an unknown backend, a non-numeric
    /// port).
    pub fn load() -> Result<Self, ConfigError> {
        // Existing variables take precedence over .env
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LICENSE_WEBHOOK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Rejects values that parse but cannot work:
    ///
    /// - server: port 0, a request timeout outside 1..=300 s, a webhook path
    ///   without a leading `/`
    /// - database: an empty URL or one whose scheme does not match the backend,
    ///   a `rest` backend without a service-role key, a table name that is not a
    ///   plain identifier, pool bounds out of order or above 100
    /// - payment: empty Stripe keys, or keys not prefixed `sk_` / `whsec_`
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.payment.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
