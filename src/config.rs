use tracing::warn;

use crate::error::{MssqlRsError, Result};
use crate::traits::{ConfigSource, EnvSource};

/// Environment key for the login user name.
pub const ENV_USER: &str = "USER";
/// Environment key for the login password.
pub const ENV_PASSWORD: &str = "PASSWORD";
/// Environment key for the server host.
pub const ENV_SERVER: &str = "SRV";
/// Environment key for the server port.
pub const ENV_PORT: &str = "PORT";
/// Environment key for the database name.
pub const ENV_DATABASE: &str = "DB";

/// Connection details for a SQL Server instance.
///
/// All fields are kept as strings; the port is handed to the driver
/// untouched, so a non-numeric value surfaces as a connection error rather
/// than a configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub user: String,
    pub password: String,
    pub server: String,
    pub port: String,
    pub database: String,
}

impl ConnectionConfig {
    /// Load configuration from the process environment.
    ///
    /// A local `.env` file is loaded first if one exists; its absence is
    /// not an error, only logged.
    ///
    /// # Example
    /// ```ignore
    /// let config = ConnectionConfig::load()?;
    /// ```
    pub fn load() -> Result<Self> {
        if dotenvy::dotenv().is_err() {
            warn!(".env file not found, relying on process environment");
        }
        Self::load_from(&EnvSource)
    }

    /// Load configuration from an arbitrary [`ConfigSource`].
    /// Useful for testing with synthetic configurations.
    pub fn load_from(source: &dyn ConfigSource) -> Result<Self> {
        let config = Self {
            user: source.get(ENV_USER).unwrap_or_default(),
            password: source.get(ENV_PASSWORD).unwrap_or_default(),
            server: source.get(ENV_SERVER).unwrap_or_default(),
            port: source.get(ENV_PORT).unwrap_or_default(),
            database: source.get(ENV_DATABASE).unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations with missing or empty required values.
    /// The error names every key that is absent.
    fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.user.is_empty() {
            missing.push(ENV_USER);
        }
        if self.password.is_empty() {
            missing.push(ENV_PASSWORD);
        }
        if self.server.is_empty() {
            missing.push(ENV_SERVER);
        }
        if self.port.is_empty() {
            missing.push(ENV_PORT);
        }
        if self.database.is_empty() {
            missing.push(ENV_DATABASE);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MssqlRsError::Configuration(missing.join(", ")))
        }
    }
}
