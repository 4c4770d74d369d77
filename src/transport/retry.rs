// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based retry layer with exponential backoff for Alloy RPC providers.
//!
//! Transient transport failures (connection loss, HTTP 429/503) are retried
//! with exponential backoff. A "too many results" refusal is never retried:
//! repeating the same oversized query cannot succeed, and the scanner needs
//! to see it immediately so it can split the block range.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket, RpcError};
use alloy_transport::{TransportError, TransportErrorKind};
use tower::Layer;
use tracing::{debug, warn};

use crate::query::OverflowMatcher;

/// Default maximum number of retry attempts.
const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default base delay for exponential backoff (100ms).
const DEFAULT_BASE_DELAY_MS: u64 = 100;
/// Default maximum delay between retries (30 seconds).
const DEFAULT_MAX_DELAY_MS: u64 = 30_000;

/// A Tower layer that retries failed RPC requests with exponential backoff.
///
/// The backoff formula is:
///
/// ```text
/// delay = min(base_delay * 2^attempt, max_delay)
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use traded_tokens::transport::RetryLayer;
/// use alloy_rpc_client::ClientBuilder;
/// use std::time::Duration;
///
/// let layer = RetryLayer::builder()
///     .max_retries(5)
///     .base_delay(Duration::from_millis(200))
///     .build();
///
/// let client = ClientBuilder::default()
///     .layer(layer)
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug)]
pub struct RetryLayer {
    config: Arc<RetryConfig>,
}

/// Configuration for retry behavior.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not including the initial request).
    pub max_retries: u32,
    /// Base delay for exponential backoff.
    pub base_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Errors matching these patterns are returned without retrying.
    pub overflow: OverflowMatcher,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_MAX_DELAY_MS),
            overflow: OverflowMatcher::default(),
        }
    }
}

impl RetryLayer {
    /// Creates a new retry layer with default settings.
    ///
    /// Default settings:
    /// - 3 retry attempts
    /// - 100ms base delay
    /// - 30s maximum delay
    /// - default overflow patterns
    pub fn new() -> Self {
        Self::from_config(RetryConfig::default())
    }

    /// Creates a builder for customizing retry configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use traded_tokens::transport::RetryLayer;
    /// use std::time::Duration;
    ///
    /// let layer = RetryLayer::builder()
    ///     .max_retries(5)
    ///     .base_delay(Duration::from_millis(200))
    ///     .build();
    ///
    /// assert_eq!(layer.config().max_retries, 5);
    /// ```
    pub fn builder() -> RetryLayerBuilder {
        RetryLayerBuilder::new()
    }

    pub fn from_config(config: RetryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

impl Default for RetryLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for RetryLayer {
    type Service = RetryService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RetryService {
            service,
            config: self.config.clone(),
        }
    }
}

/// Builder for configuring a [`RetryLayer`].
#[derive(Clone, Debug, Default)]
pub struct RetryLayerBuilder {
    config: RetryConfig,
}

impl RetryLayerBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of retry attempts (not including the initial request).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Sets the base delay for exponential backoff.
    pub fn base_delay(mut self, delay: Duration) -> Self {
        self.config.base_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.config.max_delay = delay;
        self
    }

    /// Sets the patterns of errors that must never be retried.
    pub fn overflow_matcher(mut self, overflow: OverflowMatcher) -> Self {
        self.config.overflow = overflow;
        self
    }

    /// Builds the configured [`RetryLayer`].
    pub fn build(self) -> RetryLayer {
        RetryLayer::from_config(self.config)
    }
}

/// A Tower service that adds retry logic with exponential backoff.
#[derive(Clone, Debug)]
pub struct RetryService<S> {
    service: S,
    config: Arc<RetryConfig>,
}

impl<S> tower::Service<RequestPacket> for RetryService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let service = self.service.clone();
        let config = self.config.clone();

        Box::pin(async move {
            let mut attempt = 0u32;
            loop {
                let mut service_clone = service.clone();

                match service_clone.call(request.clone()).await {
                    Ok(response) => {
                        if attempt > 0 {
                            debug!(attempt = attempt, "Request succeeded after retry");
                        }
                        return Ok(response);
                    }
                    Err(error) => {
                        if !is_retryable_error(&error, &config.overflow) {
                            debug!(error = %error, "Non-retryable error, not retrying");
                            return Err(error);
                        }

                        if attempt >= config.max_retries {
                            warn!(
                                error = %error,
                                attempts = attempt + 1,
                                "Max retries exceeded"
                            );
                            return Err(error);
                        }

                        let delay = calculate_backoff(attempt, &config);
                        warn!(
                            error = %error,
                            attempt = attempt + 1,
                            max_retries = config.max_retries,
                            delay_ms = delay.as_millis(),
                            "Retryable error, backing off"
                        );

                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                }
            }
        })
    }
}

/// Calculates the backoff duration for a given attempt.
///
/// Uses exponential backoff: `min(base_delay * 2^attempt, max_delay)`
fn calculate_backoff(attempt: u32, config: &RetryConfig) -> Duration {
    let multiplier = 2u64.saturating_pow(attempt);
    let delay_ms = config
        .base_delay
        .as_millis()
        .saturating_mul(multiplier as u128);
    let capped_delay_ms = delay_ms.min(config.max_delay.as_millis()) as u64;
    Duration::from_millis(capped_delay_ms)
}

/// Determines if an error is retryable.
///
/// Overflow refusals are never retryable, whatever their transport status.
/// Otherwise returns `true` for transient errors that may succeed on retry:
/// - Transport/connection errors (connection loss, HTTP 429/503)
/// - Malformed responses
/// - Null responses
fn is_retryable_error(error: &TransportError, overflow: &OverflowMatcher) -> bool {
    if overflow.is_overflow_error(error) {
        return false;
    }

    match error {
        RpcError::Transport(kind) => is_transport_kind_retryable(kind),
        RpcError::SerError(_) => false,
        RpcError::DeserError { .. } => true,
        RpcError::ErrorResp(err) => err.is_retry_err(),
        RpcError::NullResp => true,
        _ => false,
    }
}

fn is_transport_kind_retryable(kind: &TransportErrorKind) -> bool {
    kind.is_retry_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_json_rpc::{Id, Request};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::Service;

    /// Service that fails every call with the error produced by `make_error`
    #[derive(Clone)]
    struct FailingService {
        calls: Arc<AtomicUsize>,
        make_error: fn() -> TransportError,
    }

    impl tower::Service<RequestPacket> for FailingService {
        type Response = ResponsePacket;
        type Error = TransportError;
        type Future = Pin<Box<dyn Future<Output = Result<ResponsePacket, TransportError>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _request: RequestPacket) -> Self::Future {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let error = (self.make_error)();
            Box::pin(async move { Err(error) })
        }
    }

    fn get_logs_request() -> RequestPacket {
        let request = Request::new("eth_getLogs", Id::Number(1), ())
            .serialize()
            .unwrap();
        RequestPacket::Single(request)
    }

    fn overflow_http_error() -> TransportError {
        TransportErrorKind::http_error(
            400,
            r#"{"code":-32005,"message":"query returned more than 10000 results"}"#.to_string(),
        )
    }

    fn rate_limited() -> TransportError {
        TransportErrorKind::http_error(429, "Too Many Requests".to_string())
    }

    async fn count_calls(layer: RetryLayer, make_error: fn() -> TransportError) -> usize {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut service = layer.layer(FailingService {
            calls: calls.clone(),
            make_error,
        });

        let result = service.call(get_logs_request()).await;
        assert!(result.is_err());
        calls.load(Ordering::SeqCst)
    }

    fn fast_layer(max_retries: u32) -> RetryLayer {
        RetryLayer::builder()
            .max_retries(max_retries)
            .base_delay(Duration::from_millis(1))
            .max_delay(Duration::from_millis(2))
            .build()
    }

    #[test]
    fn test_retry_layer_defaults() {
        let layer = RetryLayer::new();
        assert_eq!(layer.config().max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(
            layer.config().base_delay,
            Duration::from_millis(DEFAULT_BASE_DELAY_MS)
        );
        assert_eq!(
            layer.config().max_delay,
            Duration::from_millis(DEFAULT_MAX_DELAY_MS)
        );
    }

    #[test]
    fn test_calculate_backoff() {
        let config = RetryConfig {
            max_retries: 5,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            ..Default::default()
        };

        assert_eq!(calculate_backoff(0, &config), Duration::from_millis(100));
        assert_eq!(calculate_backoff(1, &config), Duration::from_millis(200));
        assert_eq!(calculate_backoff(3, &config), Duration::from_millis(800));
    }

    #[test]
    fn test_calculate_backoff_capped() {
        let config = RetryConfig {
            max_retries: 100,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            ..Default::default()
        };

        assert_eq!(calculate_backoff(10, &config), Duration::from_secs(60));
        assert_eq!(calculate_backoff(50, &config), Duration::from_secs(60));
    }

    #[test]
    fn test_overflow_is_not_retryable() {
        let overflow = OverflowMatcher::default();
        assert!(!is_retryable_error(&overflow_http_error(), &overflow));
    }

    #[test]
    fn test_overflow_wins_over_retryable_status() {
        let error = TransportErrorKind::http_error(
            503,
            "query returned more than 10000 results".to_string(),
        );
        assert!(!is_retryable_error(&error, &OverflowMatcher::default()));
    }

    #[test]
    fn test_transient_http_errors_are_retryable() {
        let overflow = OverflowMatcher::default();
        assert!(is_retryable_error(&rate_limited(), &overflow));
        assert!(is_retryable_error(
            &TransportErrorKind::http_error(503, "Service Unavailable".to_string()),
            &overflow
        ));
    }

    #[tokio::test]
    async fn test_overflow_is_returned_after_one_call() {
        assert_eq!(count_calls(fast_layer(3), overflow_http_error).await, 1);
    }

    #[tokio::test]
    async fn test_transient_error_is_retried_until_limit() {
        assert_eq!(count_calls(fast_layer(2), rate_limited).await, 3);
    }
}
