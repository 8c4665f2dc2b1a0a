//! Retry policy and the retry loop shared by every client operation.
//!
//! Retries happen at whole-operation granularity: a failed upload is
//! re-encoded from scratch on the next attempt. The loop gives up as soon as
//! the policy rejects an error or the retry budget is spent, and a cancelled
//! wait ends the loop immediately.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;

use crate::error::FreshError;

/// Decides whether a failed operation should be attempted again.
///
/// Closures of type `Fn(&FreshError) -> bool` implement this trait, so a
/// custom policy can be as small as
/// `|e: &FreshError| e.status() == Some(StatusCode::SERVICE_UNAVAILABLE)`.
pub trait RetryPolicy: Send + Sync {
    /// Returns true if the operation that produced `error` should be retried.
    fn should_retry(&self, error: &FreshError) -> bool;
}

impl<F> RetryPolicy for F
where
    F: Fn(&FreshError) -> bool + Send + Sync,
{
    fn should_retry(&self, error: &FreshError) -> bool {
        self(error)
    }
}

/// The stock policy.
///
/// Retries transport failures, errors already wrapped as retryable, HTTP 429
/// and any 5xx status. Cancellation, encoding and decoding failures are never
/// retried.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn should_retry(&self, error: &FreshError) -> bool {
        match error {
            FreshError::Cancelled => false,
            FreshError::Retryable { source, .. } => !source.is_cancelled(),
            FreshError::Transport(_) => true,
            FreshError::Api(e) => {
                e.status == StatusCode::TOO_MANY_REQUESTS || e.status.is_server_error()
            }
            _ => false,
        }
    }
}

/// Bounded retry loop driven by a [`RetryPolicy`].
#[derive(Clone)]
pub struct Retrier {
    max_retries: u32,
    retry_after: Duration,
    policy: Arc<dyn RetryPolicy>,
    redact: Arc<str>,
}

impl fmt::Debug for Retrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retrier")
            .field("max_retries", &self.max_retries)
            .field("retry_after", &self.retry_after)
            .finish_non_exhaustive()
    }
}

impl Retrier {
    /// Creates a retrier with the default policy.
    ///
    /// `max_retries` counts retries after the first attempt; zero disables
    /// retrying. `retry_after` is the wait used when an error carries no hint.
    pub fn new(max_retries: u32, retry_after: Duration) -> Self {
        Self {
            max_retries,
            retry_after,
            policy: Arc::new(DefaultRetryPolicy),
            redact: Arc::from(""),
        }
    }

    /// Replaces the retry policy.
    pub fn with_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Sets a secret that must be scrubbed from retry log lines.
    pub(crate) fn with_redaction(mut self, secret: &str) -> Self {
        self.redact = Arc::from(secret);
        self
    }

    /// Retries allowed after the first attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// The fallback wait between attempts.
    pub fn retry_after(&self) -> Duration {
        self.retry_after
    }

    /// Consults the policy.
    pub fn should_retry(&self, error: &FreshError) -> bool {
        self.policy.should_retry(error)
    }

    /// Runs `f` until it succeeds, fails permanently, or the budget is spent.
    ///
    /// The error returned is always the original failure, never the retry
    /// wrapper. A cancelled wait returns `FreshError::Cancelled`.
    pub async fn run<T, F, Fut>(
        &self,
        operation: &str,
        cancel: &CancellationToken,
        f: F,
    ) -> Result<T, FreshError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, FreshError>>,
    {
        let mut retries = 0u32;

        loop {
            let err = match f().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.is_cancelled() {
                return Err(FreshError::Cancelled);
            }

            if retries >= self.max_retries || !self.policy.should_retry(&err) {
                if retries > 0 {
                    tracing::debug!(
                        operation = operation,
                        attempts = retries + 1,
                        "Giving up after retries"
                    );
                }
                return Err(err.into_inner());
            }

            let delay = match err.retry_after() {
                Some(d) if !d.is_zero() => d,
                _ => self.retry_after,
            };
            retries += 1;

            tracing::debug!(
                operation = operation,
                retry = retries,
                max_retries = self.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %FreshError::sanitize_message(&err.to_string(), &self.redact),
                "Retrying after transient error"
            );

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(FreshError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResultError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn api_error(status: u16) -> FreshError {
        FreshError::Api(ResultError::new(StatusCode::from_u16(status).unwrap()))
    }

    #[test]
    fn test_default_policy() {
        let policy = DefaultRetryPolicy;
        assert!(policy.should_retry(&api_error(429)));
        assert!(policy.should_retry(&api_error(500)));
        assert!(policy.should_retry(&api_error(503)));
        assert!(policy.should_retry(&api_error(599)));
        assert!(!policy.should_retry(&api_error(400)));
        assert!(!policy.should_retry(&api_error(404)));
        assert!(!policy.should_retry(&FreshError::Cancelled));
        assert!(!policy.should_retry(&FreshError::validation("bad")));
        assert!(policy.should_retry(&FreshError::retryable(
            FreshError::validation("flaky"),
            Duration::ZERO
        )));
        assert!(!policy.should_retry(&FreshError::retryable(
            FreshError::Cancelled,
            Duration::ZERO
        )));
    }

    #[test]
    fn test_closure_policy() {
        let retrier = Retrier::new(3, Duration::ZERO)
            .with_policy(|e: &FreshError| e.status() == Some(StatusCode::CONFLICT));
        assert!(retrier.should_retry(&api_error(409)));
        assert!(!retrier.should_retry(&api_error(503)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_after_transient_failures() {
        let retrier = Retrier::new(3, Duration::from_secs(1));
        let calls = AtomicU32::new(0);

        let result = retrier
            .run("test", &CancellationToken::new(), || async {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 {
                    Err(api_error(503))
                } else {
                    Ok(n)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_permanent_failure_is_not_retried() {
        let retrier = Retrier::new(5, Duration::from_secs(1));
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = retrier
            .run("test", &CancellationToken::new(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(422))
            })
            .await;

        assert_eq!(result.unwrap_err().status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_budget_exhaustion_returns_unwrapped_error() {
        let retrier = Retrier::new(2, Duration::from_secs(1));
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = retrier
            .run("test", &CancellationToken::new(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(FreshError::retryable(api_error(502), Duration::from_secs(4)))
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, FreshError::Api(_)));
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_retries_means_single_attempt() {
        let retrier = Retrier::new(0, Duration::from_secs(1));
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = retrier
            .run("test", &CancellationToken::new(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(500))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_hinted_delay() {
        let retrier = Retrier::new(1, Duration::from_secs(1));
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let _ = retrier
            .run("test", &CancellationToken::new(), || async {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    let mut re = ResultError::new(StatusCode::TOO_MANY_REQUESTS);
                    re.retry_after = Some(Duration::from_secs(7));
                    Err(FreshError::Api(re))
                } else {
                    Ok(())
                }
            })
            .await;

        let waited = start.elapsed();
        assert!(waited >= Duration::from_secs(7) && waited < Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_hint_uses_default_delay() {
        let retrier = Retrier::new(1, Duration::from_secs(2));
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let _ = retrier
            .run("test", &CancellationToken::new(), || async {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(FreshError::retryable(api_error(500), Duration::ZERO))
                } else {
                    Ok(())
                }
            })
            .await;

        let waited = start.elapsed();
        assert!(waited >= Duration::from_secs(2) && waited < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_wait_returns_cancelled() {
        let retrier = Retrier::new(3, Duration::from_secs(60));
        let cancel = CancellationToken::new();
        let calls = AtomicU32::new(0);
        let start = tokio::time::Instant::now();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let result: Result<(), _> = retrier
            .run("test", &cancel, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(api_error(503))
            })
            .await;

        assert!(matches!(result.unwrap_err(), FreshError::Cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_cancelled_operation_is_terminal() {
        let retrier = Retrier::new(3, Duration::from_secs(60));
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = retrier
            .run("test", &CancellationToken::new(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(FreshError::Cancelled)
            })
            .await;

        assert!(matches!(result.unwrap_err(), FreshError::Cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
