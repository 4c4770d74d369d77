// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for Alloy providers.
//!
//! This module provides Tower-based middleware layers for customizing
//! the RPC transport behavior of Alloy providers.
//!
//! # Retries
//!
//! The [`RetryLayer`] retries transient failures with exponential backoff and
//! passes "too many results" refusals straight through, so range splitting in
//! the scanner is never delayed by pointless retries.
//!
//! ```rust,ignore
//! use traded_tokens::transport::RetryLayer;
//! use alloy_rpc_client::ClientBuilder;
//! use alloy_provider::ProviderBuilder;
//!
//! let client = ClientBuilder::default()
//!     .layer(RetryLayer::new())
//!     .http(rpc_url);
//!
//! let provider = ProviderBuilder::new().connect_client(client);
//! ```

mod retry;

pub use retry::{RetryConfig, RetryLayer, RetryLayerBuilder, RetryService};
