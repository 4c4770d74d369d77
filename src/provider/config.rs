// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

use std::time::Duration;

use crate::query::OverflowMatcher;
use crate::transport::RetryConfig;

/// Configuration for creating providers and provider-backed log queries
///
/// # Example
///
/// ```rust
/// use traded_tokens::provider::ProviderConfig;
/// use std::time::Duration;
///
/// let config = ProviderConfig::new("https://eth.llamarpc.com")
///     .with_max_retries(5)
///     .with_timeout(Duration::from_secs(60));
///
/// assert_eq!(config.retry.max_retries, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Per-request timeout for log queries (None waits indefinitely)
    pub timeout: Option<Duration>,
    /// Transport retry behaviour, including the errors never retried
    pub retry: RetryConfig,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
            retry: RetryConfig::default(),
        }
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set request timeout from an optional value
    #[must_use]
    pub fn with_timeout_opt(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of transport retries
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Set the backoff bounds for transport retries
    #[must_use]
    pub fn with_backoff(mut self, base_delay: Duration, max_delay: Duration) -> Self {
        self.retry.base_delay = base_delay;
        self.retry.max_delay = max_delay;
        self
    }

    /// Set the patterns recognizing "too many results" errors
    ///
    /// Used both to skip transport retries and to classify log query failures.
    #[must_use]
    pub fn with_overflow_matcher(mut self, overflow: OverflowMatcher) -> Self {
        self.retry.overflow = overflow;
        self
    }

    pub fn overflow(&self) -> &OverflowMatcher {
        &self.retry.overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::new("http://localhost:8545");
        assert_eq!(config.url, "http://localhost:8545");
        assert_eq!(config.timeout, None);
        assert_eq!(config.retry.max_retries, 3);
    }

    #[test]
    fn test_with_backoff() {
        let config = ProviderConfig::new("http://localhost:8545")
            .with_backoff(Duration::from_millis(10), Duration::from_secs(1));
        assert_eq!(config.retry.base_delay, Duration::from_millis(10));
        assert_eq!(config.retry.max_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_overflow_matcher_is_shared_with_retry() {
        let matcher = OverflowMatcher::new(["custom overflow"]).unwrap();
        let config = ProviderConfig::new("http://localhost:8545").with_overflow_matcher(matcher);
        assert!(config.overflow().is_match("custom overflow"));
        assert!(config.retry.overflow.is_match("custom overflow"));
    }
}
