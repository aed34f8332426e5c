// src/fetch.rs

//! Resilient HTTP fetch layer.
//!
//! Wraps a single GET in a retry loop that cooperates with rate limiting:
//! transport errors and 5xx responses back off exponentially, 429 honors
//! the server's `Retry-After` when it parses as whole seconds, and any
//! other status is returned to the caller without retrying.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::RETRY_AFTER;

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;
use crate::utils::http;

/// Retry behavior for a fetch: attempt budget and backoff computation.
///
/// The backoff math is pure so it can be tested without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts per request, first try included
    pub max_attempts: u32,

    /// Base delay for exponential backoff
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &ScraperConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.backoff_base_ms),
        }
    }

    /// Backoff after a transport error or 5xx: `base * 2^attempt`.
    pub fn transport_backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    /// Backoff after a 429. A `Retry-After` value that parses as integer
    /// seconds is honored exactly; otherwise `2^attempt` seconds.
    pub fn rate_limit_backoff(&self, attempt: u32, retry_after: Option<&str>) -> Duration {
        match retry_after.and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(secs) => Duration::from_secs(secs),
            None => Duration::from_secs(1u64 << attempt.min(16)),
        }
    }

    /// Whether a response status warrants another attempt.
    pub fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }
}

/// A completed fetch: final status code and raw body bytes.
///
/// Non-retryable 4xx responses are returned here rather than as errors;
/// the caller decides whether the status is acceptable.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GET with timeout, retry and rate-limit cooperation.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(client: reqwest::Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Build a fetcher with a client configured from scraper settings.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let client = http::create_client(config)?;
        Ok(Self::new(client, RetryPolicy::from_config(config)))
    }

    /// Fetch a URL, retrying retryable failures within the attempt budget.
    ///
    /// Returns the response for any 2xx or non-429 4xx status. Fails only
    /// after the budget is exhausted, carrying the last failure cause.
    pub async fn get(&self, url: &str) -> Result<FetchResponse> {
        let mut last_failure = String::from("no attempts made");

        for attempt in 0..self.policy.max_attempts {
            let has_next = attempt + 1 < self.policy.max_attempts;

            let resp = match self.client.get(url).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    last_failure = e.to_string();
                    log::debug!("attempt {} for {} failed: {}", attempt + 1, url, e);
                    if has_next {
                        tokio::time::sleep(self.policy.transport_backoff(attempt)).await;
                    }
                    continue;
                }
            };

            let status = resp.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = resp
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok());
                let delay = self.policy.rate_limit_backoff(attempt, retry_after);
                last_failure = format!("status {}", status.as_u16());
                log::debug!(
                    "rate limited on {} (attempt {}), waiting {:?}",
                    url,
                    attempt + 1,
                    delay
                );
                if has_next {
                    tokio::time::sleep(delay).await;
                }
                continue;
            }

            if RetryPolicy::is_retryable_status(status) {
                last_failure = format!("status {}", status.as_u16());
                log::debug!(
                    "server error {} on {} (attempt {})",
                    status.as_u16(),
                    url,
                    attempt + 1
                );
                if has_next {
                    tokio::time::sleep(self.policy.transport_backoff(attempt)).await;
                }
                continue;
            }

            // 2xx and non-429 4xx are terminal either way.
            let body = resp.bytes().await?.to_vec();
            return Ok(FetchResponse {
                status: status.as_u16(),
                body,
            });
        }

        Err(AppError::fetch(url, last_failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.transport_backoff(0), Duration::from_millis(500));
        assert_eq!(policy.transport_backoff(1), Duration::from_millis(1000));
        assert_eq!(policy.transport_backoff(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_rate_limit_backoff_honors_retry_after() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.rate_limit_backoff(0, Some("7")),
            Duration::from_secs(7)
        );
        assert_eq!(
            policy.rate_limit_backoff(2, Some(" 3 ")),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_rate_limit_backoff_falls_back_to_exponential() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.rate_limit_backoff(0, None), Duration::from_secs(1));
        assert_eq!(policy.rate_limit_backoff(2, None), Duration::from_secs(4));
        // HTTP-date form of Retry-After is not an integer; ignored.
        assert_eq!(
            policy.rate_limit_backoff(1, Some("Wed, 21 Oct 2026 07:28:00 GMT")),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(RetryPolicy::is_retryable_status(
            StatusCode::TOO_MANY_REQUESTS
        ));
        assert!(RetryPolicy::is_retryable_status(
            StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(RetryPolicy::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::OK));
    }

    #[test]
    fn test_policy_from_config_clamps_attempts() {
        let config = ScraperConfig {
            max_attempts: 0,
            ..ScraperConfig::default()
        };
        assert_eq!(RetryPolicy::from_config(&config).max_attempts, 1);
    }
}
