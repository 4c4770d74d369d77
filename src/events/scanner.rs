// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Adaptive scanner for tokens traded through a settlement contract
//!
//! Providers cap how many log entries one `eth_getLogs` call may return, and
//! the cap is neither documented nor uniform. Instead of guessing a chunk
//! size, the scanner asks for the whole range first and halves any range the
//! provider refuses, recursing until every piece fits:
//!
//! ```text
//! [100, 103]  -> too many results
//! ├── [100, 101] -> ok
//! └── [102, 103] -> ok
//! ```
//!
//! Sibling halves are independent and are queried concurrently. The best case
//! is one query for the whole range; the worst case is one query per block. A
//! single block that still overflows cannot be split and fails the scan with
//! [`ScanError::UnsplittableOverflow`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use traded_tokens::{ProviderLogQuery, TradedTokensScanner, GPV2_SETTLEMENT};
//!
//! let scanner = TradedTokensScanner::new(ProviderLogQuery::new(provider), GPV2_SETTLEMENT);
//! let tokens = scanner.scan(17_000_000, 17_100_000).await?;
//!
//! for token in &tokens {
//!     println!("{token}");
//! }
//! ```

use alloy_primitives::{Address, BlockNumber};
use futures::future::{self, BoxFuture, FutureExt};
use tracing::{debug, info, Instrument};

use crate::config::ScanConfig;
use crate::errors::{LogQueryError, ScanError};
use crate::events::decoder::{SettlementTradeDecoder, TradeDecoder};
use crate::query::{LogQuery, TradeLogFilter};
use crate::spans;
use crate::types::{BlockRange, TradedTokens};

/// Discovers every token traded through a settlement contract in a block range
///
/// Generic over the [`LogQuery`] that fetches logs and the [`TradeDecoder`]
/// that extracts the traded tokens, so it can run against a live provider or
/// an in-memory fixture.
///
/// # Examples
///
/// ```rust,ignore
/// use traded_tokens::{ScanConfigBuilder, TradedTokensScanner, GPV2_SETTLEMENT};
///
/// let config = ScanConfigBuilder::new()
///     .overflow_pattern(r"Log response size exceeded")?
///     .build();
///
/// let scanner = TradedTokensScanner::new(query, GPV2_SETTLEMENT).with_config(config);
/// let tokens = scanner.scan(from_block, to_block).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TradedTokensScanner<Q, D = SettlementTradeDecoder> {
    query: Q,
    decoder: D,
    contract: Address,
    config: ScanConfig,
}

impl<Q: LogQuery> TradedTokensScanner<Q> {
    /// Create a scanner for the settlement `Trade` event with default configuration
    pub fn new(query: Q, contract: Address) -> Self {
        Self {
            query,
            decoder: SettlementTradeDecoder,
            contract,
            config: ScanConfig::default(),
        }
    }
}

impl<Q: LogQuery, D: TradeDecoder> TradedTokensScanner<Q, D> {
    /// Use a custom configuration
    #[must_use]
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Decode a different event layout
    pub fn with_decoder<D2: TradeDecoder>(self, decoder: D2) -> TradedTokensScanner<Q, D2> {
        TradedTokensScanner {
            query: self.query,
            decoder,
            contract: self.contract,
            config: self.config,
        }
    }

    /// The settlement contract being scanned
    pub fn contract(&self) -> Address {
        self.contract
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `[from_block, to_block]` (both inclusive) for traded tokens
    ///
    /// Returns the deduplicated tokens sold or bought in any `Trade` event of
    /// the range, in ascending order, without the native-asset sentinel.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidRange`] if `from_block > to_block`
    /// - [`ScanError::UnsplittableOverflow`] if a single block holds more
    ///   events than the provider returns in one query
    /// - [`ScanError::Query`] for any other log query failure, unchanged
    /// - [`ScanError::DecodeFailed`] if a returned log is not a valid `Trade`
    pub async fn scan(
        &self,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<TradedTokens, ScanError> {
        self.scan_contract(self.contract, from_block, to_block).await
    }

    /// Like [`scan`](Self::scan), for another deployment emitting the same event
    pub async fn scan_contract(
        &self,
        contract: Address,
        from_block: BlockNumber,
        to_block: BlockNumber,
    ) -> Result<TradedTokens, ScanError> {
        let range = BlockRange::new(from_block, to_block)?;
        let filter = TradeLogFilter::new(contract, self.decoder.event_topic(), range);

        async move {
            info!("Starting traded token scan");
            let tokens = self.scan_range(filter, 0).await?;
            info!(tokens_count = tokens.len(), "Finished traded token scan");
            Ok(tokens)
        }
        .instrument(spans::scan_traded_tokens(contract, range))
        .await
    }

    /// One query over `filter.range`, splitting in two on overflow
    fn scan_range(
        &self,
        filter: TradeLogFilter,
        depth: u32,
    ) -> BoxFuture<'_, Result<TradedTokens, ScanError>> {
        let range = filter.range;

        async move {
            let mut tokens = match self.query.query_logs(&filter).await {
                Ok(logs) => {
                    debug!(logs_count = logs.len(), "Fetched Trade logs");
                    let mut tokens = TradedTokens::new();
                    for log in &logs {
                        tokens.insert_pair(self.decoder.decode_trade(log)?);
                    }
                    tokens
                }
                Err(e) if self.is_overflow(&e) => {
                    let Some((lower, upper)) = range.split() else {
                        return Err(ScanError::unsplittable_overflow(
                            range.from_block(),
                            e.full_message(),
                        ));
                    };
                    debug!(
                        lower = %lower,
                        upper = %upper,
                        "Too many results, splitting range"
                    );

                    // Both halves run to completion before either result is used
                    let (lower_tokens, upper_tokens) = future::join(
                        self.scan_range(filter.with_range(lower), depth + 1),
                        self.scan_range(filter.with_range(upper), depth + 1),
                    )
                    .await;

                    let mut tokens = lower_tokens?;
                    tokens.merge(upper_tokens?);
                    tokens
                }
                Err(e) => return Err(e.into()),
            };

            tokens.remove(&self.config.native_asset_sentinel);
            Ok(tokens)
        }
        .instrument(spans::scan_range(range, depth))
        .boxed()
    }

    fn is_overflow(&self, error: &LogQueryError) -> bool {
        error.is_overflow() || self.config.overflow.is_match(&error.full_message())
    }
}
