use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

/// Retry settings for the connection loop.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,

    /// Fixed delay between attempts in milliseconds.
    pub delay_ms: u64,
}

impl RetryConfig {
    /// Create a retry configuration with the defaults:
    /// 10 retries, 2 seconds apart. An unreachable server is therefore
    /// tried 11 times over roughly 20 seconds before giving up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the delay between attempts. Test suites use short delays here.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub(crate) fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 10,
            delay_ms: 2000,
        }
    }
}

/// Retry an async operation at a fixed interval.
///
/// The operation runs once immediately. Each failure is logged and retried
/// after the configured delay; once `max_retries` retries are exhausted the
/// most recent error is returned. There is no backoff and no cancellation
/// hook: the attempt ceiling is the only bound.
pub async fn retry_fixed<F, Fut, T, E>(mut operation: F, config: &RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!("operation succeeded after {} retries", attempt);
                }
                return Ok(value);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    warn!("operation failed after {} attempts: {}", attempt, e);
                    return Err(e);
                }

                debug!(
                    "operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                    attempt,
                    config.max_retries + 1,
                    e,
                    config.delay_ms
                );

                tokio::time::sleep(config.delay()).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let config = RetryConfig::new().with_delay(10);
        let result = retry_fixed(
            || {
                let counter = counter_clone.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>("connected")
                }
            },
            &config,
        )
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt_has_no_delay() {
        let config = RetryConfig::new().with_delay(500);
        let start = std::time::Instant::now();

        let result = retry_fixed(|| async { Ok::<_, String>(()) }, &config).await;

        assert!(result.is_ok());
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_retry_success_after_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let config = RetryConfig::new().with_max_retries(10).with_delay(10);
        let result = retry_fixed(
            || {
                let counter = counter_clone.clone();
                async move {
                    let count = counter.fetch_add(1, Ordering::SeqCst);
                    if count < 2 {
                        Err(format!("attempt {} refused", count + 1))
                    } else {
                        Ok("connected")
                    }
                }
            },
            &config,
        )
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_ceiling_returns_last_error() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let config = RetryConfig::new().with_max_retries(2).with_delay(10);
        let result = retry_fixed(
            || {
                let counter = counter_clone.clone();
                async move {
                    let count = counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(format!("failure {}", count + 1))
                }
            },
            &config,
        )
        .await;

        // 1 initial attempt + 2 retries, and the error from the last one
        assert_eq!(result.unwrap_err(), "failure 3");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_sleeps_between_attempts() {
        let config = RetryConfig::new().with_max_retries(3).with_delay(20);
        let start = std::time::Instant::now();

        let _ = retry_fixed(|| async { Err::<(), _>("down") }, &config).await;

        // three sleeps of 20ms between the four attempts
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_retry_config_builder() {
        let config = RetryConfig::new().with_max_retries(5).with_delay(100);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.delay_ms, 100);
    }

    #[test]
    fn test_retry_config_defaults() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 10);
        assert_eq!(config.delay_ms, 2000);
    }
}
