//! Retry for transient storage failures
//!
//! The resilience posture at the store-access boundary: a transient
//! failure from the durable backend is retried once before the caller
//! degrades to the in-memory fallback. Validation and business-rule
//! failures are never retried.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::DomainError;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first one).
    pub max_attempts: u32,
    /// Delay between attempts.
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            delay: Duration::from_millis(100),
        }
    }
}

/// Execute an async storage operation, retrying on transient errors.
///
/// Permanent errors (`DomainError::is_transient() == false`) bail
/// immediately; the final transient error is returned to the caller,
/// which decides whether to degrade to the fallback store.
pub async fn retry_transient<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
    operation_name: &str,
) -> Result<T, DomainError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    let mut last_err = None;

    for attempt in 1..=config.max_attempts {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(operation = operation_name, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if err.is_transient() && attempt < config.max_attempts => {
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts = config.max_attempts,
                    error = %err,
                    "Transient storage failure, retrying"
                );
                tokio::time::sleep(config.delay).await;
                last_err = Some(err);
            }
            Err(err) => return Err(err),
        }
    }

    // Only reachable when max_attempts is 0; treat as a storage error.
    Err(last_err.unwrap_or_else(|| DomainError::Storage("no attempts made".into())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick() -> RetryConfig {
        RetryConfig {
            max_attempts: 2,
            delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn succeeds_first_try() {
        let calls = AtomicU32::new(0);
        let result = retry_transient(
            &quick(),
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, DomainError>(7) }
            },
            "test",
        )
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_transient_once() {
        let calls = AtomicU32::new(0);
        let result = retry_transient(
            &quick(),
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err(DomainError::Storage("blip".into()))
                    } else {
                        Ok(42)
                    }
                }
            },
            "test",
        )
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn permanent_errors_bail_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry_transient(
            &quick(),
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(DomainError::Validation("invalid age".into())) }
            },
            "test",
        )
        .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausted_retries_return_last_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry_transient(
            &quick(),
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(DomainError::Storage("down".into())) }
            },
            "test",
        )
        .await;
        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
