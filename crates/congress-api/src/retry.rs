//! Backoff policy for transient Congress.gov failures.

use std::time::Duration;

use congress_types::ApiError;
use rand::Rng;

/// How many times, and how patiently, a failed GET is repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: u32,
    pub initial_delay: Duration,
    /// Ceiling for both computed delays and server-requested waits.
    pub max_delay: Duration,
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            backoff_factor: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Total attempts a request may make.
    pub fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Wait before retrying after `error` on the zero-based `attempt`, or
    /// `None` when the request should fail now.
    ///
    /// A rate-limit response that names its own wait is honoured (capped at
    /// `max_delay`); anything else backs off exponentially.
    pub fn next_delay(&self, attempt: u32, error: &ApiError) -> Option<Duration> {
        if attempt >= self.max_retries || !is_retryable(error) {
            return None;
        }
        let delay = match error {
            ApiError::RateLimited {
                retry_after_ms: Some(ms),
                ..
            } => Duration::from_millis(*ms),
            _ => self.backoff(attempt),
        };
        Some(delay.min(self.max_delay))
    }

    /// `initial_delay * backoff_factor^attempt`, ±25 % jitter, capped.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base = self.initial_delay.as_secs_f64() * self.backoff_factor.powi(exponent);
        let capped = base.min(self.max_delay.as_secs_f64());
        let jittered = capped * rand::rng().random_range(0.75..=1.25);
        Duration::from_secs_f64(jittered.max(0.0)).min(self.max_delay)
    }
}

/// Transport failures, throttling and 5xx are worth repeating. Client
/// errors and malformed bodies are not.
pub fn is_retryable(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::RateLimited { .. }
            | ApiError::Server { .. }
            | ApiError::Network { .. }
            | ApiError::Timeout { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> String {
        "/bill/118".into()
    }

    fn unavailable() -> ApiError {
        ApiError::Server {
            path: path(),
            status: 503,
            message: "unavailable".into(),
        }
    }

    fn ms(d: Duration) -> u128 {
        d.as_millis()
    }

    #[test]
    fn defaults_allow_three_attempts() {
        let config = RetryConfig::default();
        assert_eq!(config.attempts(), 3);
        assert_eq!(config.initial_delay, Duration::from_secs(1));
        assert_eq!(config.max_delay, Duration::from_secs(60));
        assert_eq!(RetryConfig::disabled().attempts(), 1);
    }

    #[test]
    fn transient_errors_are_retryable() {
        assert!(is_retryable(&ApiError::RateLimited {
            path: path(),
            retry_after_ms: None,
        }));
        assert!(is_retryable(&unavailable()));
        assert!(is_retryable(&ApiError::Network {
            path: path(),
            message: "connection refused".into(),
        }));
        assert!(is_retryable(&ApiError::Timeout { path: path() }));
    }

    #[test]
    fn client_and_structural_errors_fail_fast() {
        let config = RetryConfig::default();
        let deterministic = [
            ApiError::Auth {
                path: path(),
                status: 403,
            },
            ApiError::NotFound { path: path() },
            ApiError::Client {
                path: path(),
                status: 400,
                message: "bad".into(),
            },
            ApiError::Structure {
                path: path(),
                message: "missing 'bills'".into(),
            },
            ApiError::InvalidRequest {
                message: "limit".into(),
            },
        ];
        for err in &deterministic {
            assert!(!is_retryable(err), "{err:?}");
            assert_eq!(config.next_delay(0, err), None, "{err:?}");
        }
    }

    #[test]
    fn gives_up_after_max_retries() {
        let config = RetryConfig::default();
        assert!(config.next_delay(0, &unavailable()).is_some());
        assert!(config.next_delay(1, &unavailable()).is_some());
        assert_eq!(config.next_delay(2, &unavailable()), None);
        assert_eq!(RetryConfig::disabled().next_delay(0, &unavailable()), None);
    }

    #[test]
    fn backoff_grows_within_jitter_bounds() {
        let config = RetryConfig {
            max_retries: 5,
            ..RetryConfig::default()
        };
        let d0 = ms(config.backoff(0));
        assert!((750..=1250).contains(&d0), "d0={d0}");
        let d1 = ms(config.backoff(1));
        assert!((1500..=2500).contains(&d1), "d1={d1}");
        let d2 = ms(config.backoff(2));
        assert!((3000..=5000).contains(&d2), "d2={d2}");
    }

    #[test]
    fn backoff_never_exceeds_ceiling() {
        let config = RetryConfig {
            max_retries: 10,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
            backoff_factor: 10.0,
        };
        assert!(config.backoff(5) <= config.max_delay);
        assert!(config.backoff(u32::MAX) <= config.max_delay);
    }

    #[test]
    fn rate_limit_wait_is_honoured_and_capped() {
        let config = RetryConfig {
            max_delay: Duration::from_secs(10),
            ..RetryConfig::default()
        };
        let asked = |ms| ApiError::RateLimited {
            path: path(),
            retry_after_ms: Some(ms),
        };
        assert_eq!(
            config.next_delay(0, &asked(5000)),
            Some(Duration::from_secs(5))
        );
        assert_eq!(
            config.next_delay(0, &asked(30_000)),
            Some(Duration::from_secs(10))
        );
    }
}
