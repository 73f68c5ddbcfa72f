//! 有限次重试与指数退避

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

/// 重试策略
///
/// 延迟按 initial_delay_ms 逐次翻倍，上限 max_delay_ms。
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
        }
    }

    /// 第 attempt 次（从 1 计）失败后的等待时长
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(1).min(20);
        let delay_ms = self
            .initial_delay_ms
            .saturating_mul(1u64 << doublings)
            .min(self.max_delay_ms);
        Duration::from_millis(delay_ms)
    }
}

/// 执行异步操作，失败则按策略重试
///
/// max_attempts 为 0 时仍然执行一次。返回最后一次的错误。
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(
                        operation = operation_name,
                        attempt, "Operation succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(e) if attempt >= attempts => {
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    "Operation failed, giving up"
                );
                return Err(e);
            }
            Err(e) => {
                let delay = config.backoff_delay(attempt);
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    delay_ms = delay.as_millis(),
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn returns_immediately_on_first_success() {
        let config = RetryConfig::new(3, 1, 10);
        let calls = AtomicU32::new(0);

        let result: Result<&str, &str> = with_retry(&config, "op", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok("done") }
        })
        .await;

        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let config = RetryConfig::new(4, 1, 10);
        let calls = AtomicU32::new(0);

        let result: Result<u32, &str> = with_retry(&config, "op", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { if n < 2 { Err("transient") } else { Ok(n) } }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_with_last_error_after_max_attempts() {
        let config = RetryConfig::new(3, 1, 10);
        let calls = AtomicU32::new(0);

        let result: Result<(), String> = with_retry(&config, "op", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(format!("failure {}", n)) }
        })
        .await;

        assert_eq!(result.unwrap_err(), "failure 2");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn zero_max_attempts_still_runs_once() {
        let config = RetryConfig::new(0, 1, 10);
        let calls = AtomicU32::new(0);

        let result: Result<(), &str> = with_retry(&config, "op", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("nope") }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backoff_doubles_until_capped() {
        let config = RetryConfig::new(6, 500, 3000);

        assert_eq!(config.backoff_delay(1), Duration::from_millis(500));
        assert_eq!(config.backoff_delay(2), Duration::from_millis(1000));
        assert_eq!(config.backoff_delay(3), Duration::from_millis(2000));
        assert_eq!(config.backoff_delay(4), Duration::from_millis(3000));
        assert_eq!(config.backoff_delay(5), Duration::from_millis(3000));
    }
}
