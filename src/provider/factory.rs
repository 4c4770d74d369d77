// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;

use crate::errors::RpcError;
use crate::query::ProviderLogQuery;
use crate::transport::RetryLayer;

use super::config::ProviderConfig;
use super::HttpProvider;

/// Create an HTTP provider with the given configuration
///
/// The transport carries a [`RetryLayer`] built from `config.retry`.
///
/// # Examples
///
/// ```rust,ignore
/// use traded_tokens::provider::{create_http_provider, ProviderConfig};
///
/// let provider = create_http_provider(&ProviderConfig::new("https://eth.llamarpc.com"))?;
/// ```
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: &ProviderConfig) -> Result<HttpProvider, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{e}")))?;

    let client = ClientBuilder::default()
        .layer(RetryLayer::from_config(config.retry.clone()))
        .http(url);

    // Fillers only matter for sending transactions
    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_client(client))
}

/// Create a [`ProviderLogQuery`] over a new HTTP provider
///
/// The log query uses the same overflow patterns as the retry layer and the
/// configured request timeout.
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_log_query(
    config: &ProviderConfig,
) -> Result<ProviderLogQuery<HttpProvider>, RpcError> {
    let provider = create_http_provider(config)?;
    let query = ProviderLogQuery::new(provider).with_overflow_matcher(config.overflow().clone());

    Ok(match config.timeout {
        Some(timeout) => query.with_timeout(timeout),
        None => query,
    })
}
