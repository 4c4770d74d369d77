// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`LogQuery`] implementation backed by an Alloy provider

use std::time::Duration;

use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::debug;

use super::{LogQuery, OverflowMatcher, TradeLogFilter};
use crate::errors::LogQueryError;

/// Runs `eth_getLogs` through an Alloy provider
///
/// Provider errors whose rendered message matches the [`OverflowMatcher`] are
/// reported as [`LogQueryError::Overflow`]; everything else is
/// [`LogQueryError::Upstream`] with the provider error as its source.
///
/// # Example
///
/// ```rust,ignore
/// use traded_tokens::ProviderLogQuery;
/// use std::time::Duration;
///
/// let query = ProviderLogQuery::new(provider).with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ProviderLogQuery<P> {
    provider: P,
    overflow: OverflowMatcher,
    timeout: Option<Duration>,
}

impl<P: Provider> ProviderLogQuery<P> {
    /// Wrap a provider using the default overflow patterns and no timeout
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            overflow: OverflowMatcher::default(),
            timeout: None,
        }
    }

    /// Use custom overflow patterns
    #[must_use]
    pub fn with_overflow_matcher(mut self, overflow: OverflowMatcher) -> Self {
        self.overflow = overflow;
        self
    }

    /// Abort each request that takes longer than `timeout`
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider> LogQuery for ProviderLogQuery<P> {
    async fn query_logs(&self, filter: &TradeLogFilter) -> Result<Vec<Log>, LogQueryError> {
        let range = filter.range;
        let rpc_filter = Filter::from(filter);

        let result = match self.timeout {
            Some(limit) => timeout(limit, self.provider.get_logs(&rpc_filter))
                .await
                .map_err(|_| {
                    debug!(%range, timeout_ms = limit.as_millis(), "Log query timed out");
                    LogQueryError::timed_out(range, limit)
                })?,
            None => self.provider.get_logs(&rpc_filter).await,
        };

        match result {
            Ok(logs) => Ok(logs),
            Err(e) if self.overflow.is_overflow_error(&e) => {
                debug!(%range, error = %e, "Provider refused oversized log query");
                Err(LogQueryError::overflow(range, e.to_string()))
            }
            Err(e) => Err(LogQueryError::upstream(range, e)),
        }
    }
}
