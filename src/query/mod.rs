// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block-range log queries
//!
//! [`LogQuery`] is the only point of contact between the scanner and the chain
//! data source. It fetches the raw logs for one event topic emitted by one
//! contract over one block range, and reports a provider's "too many results"
//! refusal as [`LogQueryError::Overflow`] so the caller can split the range.
//!
//! [`ProviderLogQuery`] implements it for any Alloy provider. Tests and
//! alternative data sources implement the trait directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use traded_tokens::{BlockRange, LogQuery, ProviderLogQuery, TradeLogFilter};
//!
//! let query = ProviderLogQuery::new(provider);
//! let filter = TradeLogFilter::new(settlement, Trade::SIGNATURE_HASH, BlockRange::new(100, 200)?);
//!
//! match query.query_logs(&filter).await {
//!     Ok(logs) => println!("{} logs", logs.len()),
//!     Err(e) if e.is_overflow() => println!("range {} is too dense", e.range()),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod overflow;
mod provider;

pub use overflow::{OverflowMatcher, EXCEEDS_MAX_RESULTS, QUERY_RETURNED_MORE_THAN};
pub use provider::ProviderLogQuery;

use alloy_primitives::{Address, B256};
use alloy_rpc_types::{Filter, Log};
use async_trait::async_trait;

use crate::errors::LogQueryError;
use crate::types::BlockRange;

/// The parameters of a single log query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeLogFilter {
    /// Contract emitting the events
    pub address: Address,
    /// Event signature hash (topic 0)
    pub topic: B256,
    /// Blocks to search, both bounds inclusive
    pub range: BlockRange,
}

impl TradeLogFilter {
    pub fn new(address: Address, topic: B256, range: BlockRange) -> Self {
        Self {
            address,
            topic,
            range,
        }
    }

    /// Same contract and topic over another range
    pub fn with_range(&self, range: BlockRange) -> Self {
        Self { range, ..*self }
    }
}

impl From<&TradeLogFilter> for Filter {
    fn from(filter: &TradeLogFilter) -> Self {
        Filter::new()
            .address(filter.address)
            .event_signature(filter.topic)
            .from_block(filter.range.from_block())
            .to_block(filter.range.to_block())
    }
}

/// Fetches raw logs for a contract, topic, and block range
///
/// Implementations should return [`LogQueryError::Overflow`] when the provider
/// refuses the query because the result would be too large. Implementations
/// that can only report free text may return [`LogQueryError::Upstream`]; the
/// scanner also checks those messages against its [`OverflowMatcher`].
///
/// Retry policy and timeouts, if any, belong to the implementation.
#[async_trait]
pub trait LogQuery: Send + Sync {
    /// Fetch every log matching `filter`
    async fn query_logs(&self, filter: &TradeLogFilter) -> Result<Vec<Log>, LogQueryError>;
}

#[async_trait]
impl<Q: LogQuery + ?Sized> LogQuery for &Q {
    async fn query_logs(&self, filter: &TradeLogFilter) -> Result<Vec<Log>, LogQueryError> {
        (**self).query_logs(filter).await
    }
}

#[async_trait]
impl<Q: LogQuery + ?Sized> LogQuery for std::sync::Arc<Q> {
    async fn query_logs(&self, filter: &TradeLogFilter) -> Result<Vec<Log>, LogQueryError> {
        (**self).query_logs(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use alloy_rpc_types::FilterBlockOption;

    #[test]
    fn test_filter_conversion_sets_range_address_and_topic() {
        let settlement = address!("9008d19f58aabd9ed0d60971565aa8510560ab41");
        let topic = B256::repeat_byte(0xab);
        let filter = TradeLogFilter::new(settlement, topic, BlockRange::new(100, 200).unwrap());

        let alloy_filter = Filter::from(&filter);

        assert_eq!(alloy_filter.get_from_block(), Some(100));
        assert_eq!(alloy_filter.get_to_block(), Some(200));
        assert!(matches!(alloy_filter.block_option, FilterBlockOption::Range { .. }));
        assert!(alloy_filter.address.matches(&settlement));
        assert!(alloy_filter.topics[0].matches(&topic));
    }

    #[test]
    fn test_with_range_keeps_address_and_topic() {
        let filter = TradeLogFilter::new(
            Address::repeat_byte(1),
            B256::repeat_byte(2),
            BlockRange::new(0, 10).unwrap(),
        );
        let narrowed = filter.with_range(BlockRange::single(5));

        assert_eq!(narrowed.address, filter.address);
        assert_eq!(narrowed.topic, filter.topic);
        assert_eq!(narrowed.range, BlockRange::single(5));
    }
}
