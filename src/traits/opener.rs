use async_trait::async_trait;

use crate::config::ConnectionConfig;
use crate::dsn::TransportOptions;
use crate::error::Result;

/// Trait for connection opener implementations.
/// An opener is responsible for exactly one connection attempt against the
/// configured server; the retry policy lives outside it.
#[async_trait]
pub trait ConnectionOpener: Send + Sync {
    /// Driver-specific handle wrapping a live database session.
    type Handle: Send;

    /// Attempt to open a single connection.
    async fn open(
        &self,
        config: &ConnectionConfig,
        options: &TransportOptions,
    ) -> Result<Self::Handle>;
}
