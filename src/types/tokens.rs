//! Result set of traded token addresses

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The sell and buy legs of a single settlement trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TradedPair {
    /// Token the trader sold
    pub sell_token: Address,
    /// Token the trader bought
    pub buy_token: Address,
}

impl TradedPair {
    pub fn new(sell_token: Address, buy_token: Address) -> Self {
        Self {
            sell_token,
            buy_token,
        }
    }

    /// Both legs, sell token first
    pub fn tokens(&self) -> [Address; 2] {
        [self.sell_token, self.buy_token]
    }
}

/// Set of unique token addresses traded in a block range
///
/// Addresses are 20-byte values, so deduplication is exact and ordering is
/// byte-wise. Byte-wise order is the same as comparing lowercase hex strings,
/// which makes the iteration order identical to a case-insensitive sort of the
/// addresses' textual forms, and two addresses that differ only in letter case
/// cannot exist.
///
/// Uses `BTreeSet` internally for:
/// - Automatic deduplication
/// - Deterministic ascending ordering
///
/// # Examples
///
/// ```
/// use traded_tokens::TradedTokens;
/// use alloy_primitives::address;
///
/// let dai = address!("6b175474e89094c44da98b954eedeac495271d0f");
/// let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
///
/// let tokens: TradedTokens = [usdc, dai, usdc].into_iter().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens.into_vec(), vec![dai, usdc]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradedTokens(BTreeSet<Address>);

impl TradedTokens {
    /// Create a new empty set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a token address
    ///
    /// Returns `true` if the token was newly inserted, `false` if it was already present.
    pub fn insert(&mut self, token: Address) -> bool {
        self.0.insert(token)
    }

    /// Insert both legs of a trade
    pub fn insert_pair(&mut self, pair: TradedPair) {
        self.0.extend(pair.tokens());
    }

    /// Merge another set into this one
    pub fn merge(&mut self, other: TradedTokens) {
        self.0.extend(other.0);
    }

    /// Remove a token address, returning whether it was present
    pub fn remove(&mut self, token: &Address) -> bool {
        self.0.remove(token)
    }

    pub fn contains(&self, token: &Address) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }

    /// Sorted, deduplicated addresses
    pub fn into_vec(self) -> Vec<Address> {
        self.0.into_iter().collect()
    }
}

impl Extend<Address> for TradedTokens {
    fn extend<T: IntoIterator<Item = Address>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Address> for TradedTokens {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl IntoIterator for TradedTokens {
    type Item = Address;
    type IntoIter = std::collections::btree_set::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TradedTokens {
    type Item = &'a Address;
    type IntoIter = std::collections::btree_set::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for TradedTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TradedTokens({} tokens)", self.len())
    }
}
