//! Well-known addresses
//!
//! Centralizes the settlement deployment and the native-asset sentinel so
//! callers do not repeat magic addresses.

use alloy_primitives::{address, Address};

/// Address used in place of a token to denote the chain's native currency
///
/// Orders buying native ETH (or xDAI, etc.) name this address as their buy
/// token. It is not a contract and is never part of a traded-token result.
///
/// Address: 0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE
pub const NATIVE_ASSET_SENTINEL: Address = address!("eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee");

/// GPv2 settlement contract
///
/// Deployed deterministically, so the address is identical on every chain.
///
/// Contract: 0x9008D19f58AAbD9eD0D60971565AA8510560ab41
pub const GPV2_SETTLEMENT: Address = address!("9008d19f58aabd9ed0d60971565aa8510560ab41");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_asset_sentinel_checksum() {
        assert_eq!(
            NATIVE_ASSET_SENTINEL.to_checksum(None),
            "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE"
        );
    }

    #[test]
    fn test_settlement_checksum() {
        assert_eq!(
            GPV2_SETTLEMENT.to_checksum(None),
            "0x9008D19f58AAbD9eD0D60971565AA8510560ab41"
        );
    }
}
