// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP provider construction
//!
//! This module provides:
//! - [`create_http_provider`] - HTTP provider whose transport retries transient failures
//! - [`create_log_query`] - The same provider wrapped as a [`LogQuery`](crate::LogQuery)
//!
//! # Example
//!
//! ```rust,ignore
//! use traded_tokens::provider::{create_log_query, ProviderConfig};
//! use traded_tokens::{TradedTokensScanner, GPV2_SETTLEMENT};
//! use std::time::Duration;
//!
//! let query = create_log_query(
//!     &ProviderConfig::new("https://eth.llamarpc.com").with_timeout(Duration::from_secs(30)),
//! )?;
//!
//! let tokens = TradedTokensScanner::new(query, GPV2_SETTLEMENT)
//!     .scan(17_000_000, 17_100_000)
//!     .await?;
//! ```

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::{create_http_provider, create_log_query};

use alloy_network::Ethereum;

/// Type alias for an HTTP provider on an Ethereum-compatible network
pub type HttpProvider = alloy_provider::RootProvider<Ethereum>;
