// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for traded-tokens integration tests
//!
//! Provides an in-memory [`LogQuery`] that behaves like a capped RPC provider,
//! so the scanner can be tested without a real blockchain connection.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use alloy_primitives::{address, Address, BlockNumber, Bytes, B256, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use async_trait::async_trait;
use traded_tokens::{BlockRange, LogQuery, LogQueryError, Trade, TradeLogFilter, GPV2_SETTLEMENT};

pub const TOKEN_A: Address = address!("1000000000000000000000000000000000000001");
pub const TOKEN_B: Address = address!("2000000000000000000000000000000000000002");
pub const TOKEN_C: Address = address!("3000000000000000000000000000000000000003");
pub const TOKEN_D: Address = address!("4000000000000000000000000000000000000004");

/// Message an Infura-style provider sends when a range is too dense
pub const OVERFLOW_MESSAGE: &str = "query returned more than 10000 results";

/// Build an RPC log carrying an encoded settlement `Trade` event
pub fn create_trade_log(block: BlockNumber, sell_token: Address, buy_token: Address) -> Log {
    let trade = Trade {
        owner: address!("00000000000000000000000000000000000000aa"),
        sellToken: sell_token,
        buyToken: buy_token,
        sellAmount: U256::from(1_000u64),
        buyAmount: U256::from(1_000u64),
        feeAmount: U256::ZERO,
        orderUid: Bytes::from(vec![0u8; 56]),
    };

    Log {
        inner: alloy_primitives::Log {
            address: GPV2_SETTLEMENT,
            data: trade.encode_log_data(),
        },
        block_hash: Some(B256::with_last_byte(block as u8)),
        block_number: Some(block),
        block_timestamp: None,
        transaction_hash: Some(B256::ZERO),
        transaction_index: Some(0),
        log_index: Some(0),
        removed: false,
    }
}

/// How the mock reports an oversized result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowStyle {
    /// As [`LogQueryError::Overflow`]
    Typed,
    /// As an upstream error whose message matches the overflow pattern
    MessageOnly,
}

/// In-memory provider with a per-query result cap
///
/// # Example
///
/// ```rust,ignore
/// let query = MockLogQuery::new()
///     .with_trade(100, TOKEN_A, TOKEN_B)
///     .with_max_results(1);
///
/// let tokens = TradedTokensScanner::new(&query, GPV2_SETTLEMENT).scan(100, 200).await?;
/// assert_eq!(query.queried_ranges().len(), 1);
/// ```
pub struct MockLogQuery {
    logs: BTreeMap<BlockNumber, Vec<Log>>,
    max_results: Option<usize>,
    overflow_style: OverflowStyle,
    forced_overflows: HashSet<BlockRange>,
    failures: Vec<(BlockNumber, String)>,
    queried: Mutex<Vec<BlockRange>>,
}

impl MockLogQuery {
    pub fn new() -> Self {
        Self {
            logs: BTreeMap::new(),
            max_results: None,
            overflow_style: OverflowStyle::Typed,
            forced_overflows: HashSet::new(),
            failures: Vec::new(),
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Add one trade in `block`
    pub fn with_trade(mut self, block: BlockNumber, sell: Address, buy: Address) -> Self {
        self.logs
            .entry(block)
            .or_default()
            .push(create_trade_log(block, sell, buy));
        self
    }

    /// Add a raw log in `block`
    pub fn with_log(mut self, block: BlockNumber, log: Log) -> Self {
        self.logs.entry(block).or_default().push(log);
        self
    }

    /// Refuse any query that would return more than `max` logs
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    pub fn with_overflow_style(mut self, style: OverflowStyle) -> Self {
        self.overflow_style = style;
        self
    }

    /// Refuse exactly this range regardless of its contents
    pub fn with_forced_overflow(mut self, range: BlockRange) -> Self {
        self.forced_overflows.insert(range);
        self
    }

    /// Fail any query covering `block` that is not refused as an overflow
    pub fn with_failure_at(mut self, block: BlockNumber, message: impl Into<String>) -> Self {
        self.failures.push((block, message.into()));
        self
    }

    /// Every range queried so far, in call order
    pub fn queried_ranges(&self) -> Vec<BlockRange> {
        self.queried.lock().unwrap().clone()
    }

    fn overflow(&self, range: BlockRange) -> LogQueryError {
        match self.overflow_style {
            OverflowStyle::Typed => LogQueryError::overflow(range, OVERFLOW_MESSAGE),
            OverflowStyle::MessageOnly => LogQueryError::upstream(range, OVERFLOW_MESSAGE),
        }
    }
}

impl Default for MockLogQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogQuery for MockLogQuery {
    async fn query_logs(&self, filter: &TradeLogFilter) -> Result<Vec<Log>, LogQueryError> {
        let range = filter.range;
        self.queried.lock().unwrap().push(range);

        let logs: Vec<Log> = self
            .logs
            .range(range.from_block()..=range.to_block())
            .flat_map(|(_, logs)| logs.iter().cloned())
            .filter(|log| log.inner.address == filter.address)
            .filter(|log| log.inner.topics().first() == Some(&filter.topic))
            .collect();

        let too_many = self.max_results.is_some_and(|max| logs.len() > max);
        if too_many || self.forced_overflows.contains(&range) {
            return Err(self.overflow(range));
        }

        if let Some((_, message)) = self
            .failures
            .iter()
            .find(|(block, _)| range.contains(*block))
        {
            return Err(LogQueryError::upstream(range, message.clone()));
        }

        Ok(logs)
    }
}
