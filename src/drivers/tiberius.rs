use async_trait::async_trait;
use tiberius::{AuthMethod, Client, Config, EncryptionLevel};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::config::ConnectionConfig;
use crate::dsn::TransportOptions;
use crate::error::{MssqlRsError, Result};
use crate::traits::ConnectionOpener;

/// Live SQL Server session produced by the production opener.
pub type MssqlConnection = Client<Compat<TcpStream>>;

/// SQL Server opener implementation using the tiberius driver.
pub struct TiberiusOpener;

impl TiberiusOpener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TiberiusOpener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionOpener for TiberiusOpener {
    type Handle = MssqlConnection;

    async fn open(
        &self,
        config: &ConnectionConfig,
        options: &TransportOptions,
    ) -> Result<Self::Handle> {
        // The port stays a string in the config; a non-numeric value is a
        // driver-level failure, surfaced (and retried) like any other.
        let port: u16 = config.port.parse().map_err(|_| {
            MssqlRsError::ConnectionFailed(format!("invalid port '{}'", config.port))
        })?;

        let mut driver_config = Config::new();
        driver_config.host(&config.server);
        driver_config.port(port);
        driver_config.database(&config.database);
        driver_config.authentication(AuthMethod::sql_server(&config.user, &config.password));
        driver_config.encryption(if options.encrypt {
            EncryptionLevel::Required
        } else {
            EncryptionLevel::NotSupported
        });
        if options.trust_server_certificate {
            driver_config.trust_cert();
        }

        let tcp = TcpStream::connect(driver_config.get_addr())
            .await
            .map_err(|e| MssqlRsError::ConnectionFailed(e.to_string()))?;
        tcp.set_nodelay(true)
            .map_err(|e| MssqlRsError::ConnectionFailed(e.to_string()))?;

        let client = Client::connect(driver_config, tcp.compat_write())
            .await
            .map_err(|e| MssqlRsError::ConnectionFailed(e.to_string()))?;

        Ok(client)
    }
}
