//! Traded token discovery against a live provider
//!
//! Thin wrappers that pair an Alloy provider with [`ProviderLogQuery`] and a
//! [`TradedTokensScanner`], for callers that do not need to customize the log
//! query or the decoder.
//!
//! # Example: Tokens traded through the settlement contract
//!
//! ```rust,ignore
//! use traded_tokens::{discover_traded_tokens, GPV2_SETTLEMENT};
//! use alloy_provider::ProviderBuilder;
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//!
//! let tokens = discover_traded_tokens(&provider, GPV2_SETTLEMENT, 17_000_000, 17_100_000).await?;
//! println!("Found {} unique tokens", tokens.len());
//! ```
//!
//! # Typical Workflow
//!
//! 1. Discover tokens: [`discover_traded_tokens()`]
//! 2. Check the settlement contract's balance of each token
//! 3. Withdraw the tokens with non-zero balances

use alloy_primitives::{Address, BlockNumber};
use alloy_provider::Provider;

use crate::config::ScanConfig;
use crate::errors::ScanError;
use crate::events::scanner::TradedTokensScanner;
use crate::query::ProviderLogQuery;
use crate::types::TradedTokens;

/// Discover tokens traded through `settlement` using default configuration
///
/// # Arguments
///
/// * `provider` - RPC provider for blockchain queries
/// * `settlement` - Settlement contract emitting `Trade` events
/// * `from_block` - First block in range (inclusive)
/// * `to_block` - Last block in range (inclusive)
pub async fn discover_traded_tokens<P: Provider>(
    provider: P,
    settlement: Address,
    from_block: BlockNumber,
    to_block: BlockNumber,
) -> Result<TradedTokens, ScanError> {
    discover_traded_tokens_with_config(
        provider,
        settlement,
        from_block,
        to_block,
        ScanConfig::default(),
    )
    .await
}

/// Discover tokens traded through `settlement` with custom configuration
///
/// The configuration's overflow patterns are used both by the provider log
/// query and by the scanner.
///
/// # Example
///
/// ```rust,ignore
/// use traded_tokens::{discover_traded_tokens_with_config, ScanConfigBuilder, GPV2_SETTLEMENT};
///
/// let config = ScanConfigBuilder::new()
///     .overflow_pattern(r"Log response size exceeded")?
///     .build();
///
/// let tokens = discover_traded_tokens_with_config(
///     &provider,
///     GPV2_SETTLEMENT,
///     40_000_000,
///     40_100_000,
///     config,
/// ).await?;
/// ```
pub async fn discover_traded_tokens_with_config<P: Provider>(
    provider: P,
    settlement: Address,
    from_block: BlockNumber,
    to_block: BlockNumber,
    config: ScanConfig,
) -> Result<TradedTokens, ScanError> {
    let query = ProviderLogQuery::new(provider).with_overflow_matcher(config.overflow.clone());

    TradedTokensScanner::new(query, settlement)
        .with_config(config)
        .scan(from_block, to_block)
        .await
}
