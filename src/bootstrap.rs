// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Environment-driven entry point for the `traded-tokens` binary.
//!
//! Variables (a `.env` file is loaded first if present):
//!
//! | Variable              | Required | Default                        |
//! |-----------------------|----------|--------------------------------|
//! | `RPC_URL`             | yes      |                                |
//! | `FROM_BLOCK`          | yes      |                                |
//! | `TO_BLOCK`            | no       | latest block                   |
//! | `SETTLEMENT_CONTRACT` | no       | [`GPV2_SETTLEMENT`]            |
//! | `RPC_TIMEOUT_SECS`    | no       | no timeout                     |
//! | `RPC_MAX_RETRIES`     | no       | 3                              |

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{Address, BlockNumber};
use alloy_provider::Provider;
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use crate::config::constants::GPV2_SETTLEMENT;
use crate::errors::{RpcError, TradedTokensError};
use crate::events::TradedTokensScanner;
use crate::provider::{create_log_query, ProviderConfig};
use crate::types::TradedTokens;

/// Settings for one scan, usually read from the environment
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub provider: ProviderConfig,
    pub settlement: Address,
    pub from_block: BlockNumber,
    /// `None` scans up to the latest block
    pub to_block: Option<BlockNumber>,
}

impl BootstrapConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let rpc_url = lookup("RPC_URL").context("RPC_URL must be set")?;
        let from_block =
            parse_var::<BlockNumber>(&lookup, "FROM_BLOCK")?.context("FROM_BLOCK must be set")?;
        let to_block = parse_var::<BlockNumber>(&lookup, "TO_BLOCK")?;
        let settlement =
            parse_var::<Address>(&lookup, "SETTLEMENT_CONTRACT")?.unwrap_or(GPV2_SETTLEMENT);
        let timeout = parse_var::<u64>(&lookup, "RPC_TIMEOUT_SECS")?.map(Duration::from_secs);

        let mut provider = ProviderConfig::new(rpc_url).with_timeout_opt(timeout);
        if let Some(max_retries) = parse_var::<u32>(&lookup, "RPC_MAX_RETRIES")? {
            provider = provider.with_max_retries(max_retries);
        }

        Ok(Self {
            provider,
            settlement,
            from_block,
            to_block,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("Invalid {name}: {value}"))
        })
        .transpose()
}

/// Scan the configured range, resolving an open-ended range against the chain head
pub async fn scan(config: &BootstrapConfig) -> Result<TradedTokens, TradedTokensError> {
    let query = create_log_query(&config.provider)?;

    let to_block = match config.to_block {
        Some(block) => block,
        None => query
            .provider()
            .get_block_number()
            .await
            .map_err(RpcError::get_block_number_failed)?,
    };

    info!(
        settlement = %config.settlement,
        from_block = config.from_block,
        to_block = to_block,
        "Scanning for traded tokens"
    );

    let tokens = TradedTokensScanner::new(query, config.settlement)
        .scan(config.from_block, to_block)
        .await?;
    Ok(tokens)
}

/// Main entry point for the binary: scan and print the tokens as JSON.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let config = BootstrapConfig::from_env()?;
    let tokens = scan(&config).await?;

    info!(tokens_count = tokens.len(), "Scan complete");
    println!("{}", serde_json::to_string_pretty(&tokens)?);

    Ok(())
}
