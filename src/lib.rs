//! mssqlrs - A driver-agnostic, retry-aware SQL Server connection bootstrap
//!
//! # Example
//! ```ignore
//! use mssqlrs::ConnectionConfig;
//!
//! // Configuration from USER / PASSWORD / SRV / PORT / DB
//! let config = ConnectionConfig::load()?;
//!
//! // Connect with the default retry settings (10 retries, 2s apart)
//! let client = mssqlrs::connect(&config).await?;
//! ```
//!
//! For tests, inject a scripted opener instead of the real driver:
//! ```ignore
//! use mssqlrs::{Connector, RetryConfig};
//! use mssqlrs::drivers::InMemoryTestOpener;
//!
//! let opener = InMemoryTestOpener::new().with_failures(2, "refused");
//! let connector = Connector::with_opener(opener)
//!     .with_retry(RetryConfig::new().with_delay(10));
//! let handle = connector.connect(&config).await?;
//! ```

pub mod config;
pub mod drivers;
pub mod dsn;
pub mod error;
pub mod retry;
pub mod traits;

mod client;

// Re-export main types for convenient access
pub use client::{connect, Connector};
pub use config::ConnectionConfig;
pub use dsn::TransportOptions;
pub use error::{MssqlRsError, Result};
pub use retry::RetryConfig;
pub use traits::{ConfigSource, ConnectionOpener, EnvSource};
