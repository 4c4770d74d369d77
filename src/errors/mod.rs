//! Error types for the traded-tokens library.
//!
//! Each concern has its own error type:
//! - [`LogQueryError`] - Errors from a single log query (overflow vs. upstream failure)
//! - [`ScanError`] - Errors from a full traded token scan
//! - [`RpcError`] - Errors from provider construction and non-log RPC calls
//!
//! [`TradedTokensError`] unifies them for callers that do not need to tell the
//! sources apart.
//!
//! # Examples
//!
//! ```rust,ignore
//! use traded_tokens::{discover_traded_tokens, TradedTokensError, ScanError};
//!
//! match discover_traded_tokens(&provider, settlement, 17_000_000, 17_100_000).await {
//!     Ok(tokens) => println!("{tokens}"),
//!     Err(ScanError::UnsplittableOverflow { block, .. }) => {
//!         eprintln!("Block {block} cannot be fetched in one query");
//!     }
//!     Err(e) => eprintln!("Scan failed: {e}"),
//! }
//! ```

mod query;
mod rpc;
mod scan;

pub use query::LogQueryError;
pub use rpc::RpcError;
pub use scan::ScanError;

/// Unified error type for all traded-tokens operations.
///
/// Module-specific error types convert into it via `From`, so `?` works
/// across provider construction and scanning.
#[derive(Debug, thiserror::Error)]
pub enum TradedTokensError {
    /// Error from provider construction or non-log RPC calls.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from a traded token scan.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

impl From<LogQueryError> for TradedTokensError {
    fn from(error: LogQueryError) -> Self {
        TradedTokensError::Scan(ScanError::Query(error))
    }
}
