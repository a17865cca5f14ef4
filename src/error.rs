use thiserror::Error;

/// Error type for mssqlrs operations
#[derive(Debug, Error)]
pub enum MssqlRsError {
    #[error("Missing required configuration: {0}")]
    Configuration(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type alias for mssqlrs operations
pub type Result<T> = std::result::Result<T, MssqlRsError>;
