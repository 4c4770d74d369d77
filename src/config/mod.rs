//! Configuration for traded token scans
//!
//! # Example: Using defaults
//!
//! ```rust
//! use traded_tokens::{ScanConfig, NATIVE_ASSET_SENTINEL};
//!
//! let config = ScanConfig::default();
//! assert_eq!(config.native_asset_sentinel, NATIVE_ASSET_SENTINEL);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use traded_tokens::ScanConfigBuilder;
//! use alloy_primitives::address;
//!
//! let config = ScanConfigBuilder::new()
//!     .native_asset_sentinel(address!("0000000000000000000000000000000000000001"))
//!     .overflow_pattern(r"Log response size exceeded")
//!     .unwrap()
//!     .build();
//! ```

use alloy_primitives::Address;

use crate::query::OverflowMatcher;

pub mod constants;

use constants::NATIVE_ASSET_SENTINEL;

/// Configuration for [`TradedTokensScanner`](crate::TradedTokensScanner)
///
/// Use [`ScanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Address excluded from every result because it stands for the native asset
    /// Default: [`NATIVE_ASSET_SENTINEL`]
    pub native_asset_sentinel: Address,

    /// Patterns recognizing "too many results" in error messages the log
    /// query did not classify itself
    /// Default: [`OverflowMatcher::default`]
    pub overflow: OverflowMatcher,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            native_asset_sentinel: NATIVE_ASSET_SENTINEL,
            overflow: OverflowMatcher::default(),
        }
    }
}

/// Builder for [`ScanConfig`]
///
/// # Example
///
/// ```rust
/// use traded_tokens::{OverflowMatcher, ScanConfigBuilder};
///
/// let config = ScanConfigBuilder::new()
///     .overflow_matcher(OverflowMatcher::new(["response too large"]).unwrap())
///     .build();
///
/// assert!(config.overflow.is_match("response too large"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a different address from results
    pub fn native_asset_sentinel(mut self, sentinel: Address) -> Self {
        self.config.native_asset_sentinel = sentinel;
        self
    }

    /// Replace the overflow patterns
    pub fn overflow_matcher(mut self, overflow: OverflowMatcher) -> Self {
        self.config.overflow = overflow;
        self
    }

    /// Add an overflow pattern on top of the current ones
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn overflow_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.config.overflow = self.config.overflow.with_pattern(pattern)?;
        Ok(self)
    }

    /// Build the final configuration
    pub fn build(self) -> ScanConfig {
        self.config
    }
}
