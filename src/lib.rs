// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Discover every token traded through a settlement contract in a block range.
//!
//! The scanner fetches the contract's `Trade` logs and, whenever the provider
//! refuses a query for returning too many results, splits the block range in
//! half and queries both halves concurrently. No chunk size has to be guessed
//! up front: dense ranges are split as far as needed, sparse ranges are
//! fetched in one call.
//!
//! # Example
//!
//! ```rust,ignore
//! use traded_tokens::provider::{create_log_query, ProviderConfig};
//! use traded_tokens::{TradedTokensScanner, GPV2_SETTLEMENT};
//!
//! let query = create_log_query(&ProviderConfig::new("https://eth.llamarpc.com"))?;
//! let scanner = TradedTokensScanner::new(query, GPV2_SETTLEMENT);
//!
//! let tokens = scanner.scan(17_000_000, 17_100_000).await?;
//! println!("{}", serde_json::to_string_pretty(&tokens)?);
//! ```

pub mod bootstrap;
mod config;
mod errors;
mod events;
pub mod provider;
mod query;
mod spans;
pub mod transport;
mod types;

pub use config::constants::{GPV2_SETTLEMENT, NATIVE_ASSET_SENTINEL};
pub use config::{ScanConfig, ScanConfigBuilder};
pub use errors::{LogQueryError, RpcError, ScanError, TradedTokensError};
pub use events::{
    discover_traded_tokens, discover_traded_tokens_with_config, SettlementTradeDecoder, Trade,
    TradeDecoder, TradedTokensScanner,
};
pub use query::{
    LogQuery, OverflowMatcher, ProviderLogQuery, TradeLogFilter, EXCEEDS_MAX_RESULTS,
    QUERY_RETURNED_MORE_THAN,
};
pub use types::{BlockRange, TradedPair, TradedTokens};
