//! Tracing initialization.
//!
//! Services embedding this client install one global subscriber at startup:
//!
//! ```ignore
//! verdict::Telemetry::new("account-service").init()?;
//! ```
//!
//! The effective configuration is logged once after installation, so a
//! service's boot log records where its traces go.

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Tracing configuration for a service embedding this client.
#[derive(Debug, Clone)]
pub struct Telemetry {
    service_name: String,
    max_level: Level,
}

impl Telemetry {
    /// Create a telemetry configuration for the named service.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            max_level: Level::INFO,
        }
    }

    /// Set the maximum log level (default: INFO).
    #[must_use]
    pub const fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    /// Name of the service this configuration belongs to.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Install a fmt subscriber as the global default and log the
    /// effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    /// Tests sharing a process may ignore this.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(self.max_level)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;

        info!(
            service = %self.service_name,
            max_level = %self.max_level,
            "tracing initialized"
        );
        Ok(())
    }
}
