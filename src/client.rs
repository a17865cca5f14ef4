use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::drivers::{MssqlConnection, TiberiusOpener};
use crate::dsn::{self, TransportOptions};
use crate::error::Result;
use crate::retry::{retry_fixed, RetryConfig};
use crate::traits::ConnectionOpener;

/// Main entry point for mssqlrs.
/// Wires a connection opener to the bounded fixed-interval retry loop.
pub struct Connector<O: ConnectionOpener> {
    opener: O,
    options: TransportOptions,
    retry: RetryConfig,
}

impl Connector<TiberiusOpener> {
    /// Create a connector backed by the production SQL Server driver, with
    /// default transport options and retry settings.
    pub fn new() -> Self {
        Self::with_opener(TiberiusOpener::new())
    }
}

impl Default for Connector<TiberiusOpener> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ConnectionOpener> Connector<O> {
    /// Create a connector with a custom opener.
    /// Useful for testing or alternative drivers.
    pub fn with_opener(opener: O) -> Self {
        Self {
            opener,
            options: TransportOptions::default(),
            retry: RetryConfig::default(),
        }
    }

    /// Replace the transport options rendered into the DSN.
    pub fn with_transport_options(mut self, options: TransportOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the retry settings.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Open a connection, retrying at a fixed interval while the server is
    /// not yet ready.
    ///
    /// Returns the driver handle from the first successful attempt, or the
    /// most recent error once the retry ceiling is exceeded. The handle is
    /// owned by the caller; the connector keeps no reference to it.
    pub async fn connect(&self, config: &ConnectionConfig) -> Result<O::Handle> {
        debug!(
            "opening database connection to {}",
            dsn::redacted(config, &self.options)
        );

        let handle = retry_fixed(|| self.opener.open(config, &self.options), &self.retry).await?;

        info!("connected to the database");
        Ok(handle)
    }

    /// Access the opener, mainly for test assertions.
    pub fn opener(&self) -> &O {
        &self.opener
    }
}

/// Connect with the production driver and default settings.
///
/// Equivalent to `Connector::new().connect(config)`.
///
/// # Example
/// ```ignore
/// let config = ConnectionConfig::load()?;
/// let client = mssqlrs::connect(&config).await?;
/// ```
pub async fn connect(config: &ConnectionConfig) -> Result<MssqlConnection> {
    Connector::new().connect(config).await
}
