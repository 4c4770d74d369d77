//! Settlement contract event definitions for blockchain event decoding
//!
//! # Event Signatures
//!
//! - **Trade**: `Trade(address,address,address,uint256,uint256,uint256,bytes)`
//!
//! # Example: Decoding Trade events
//!
//! ```rust,ignore
//! use traded_tokens::Trade;
//! use alloy_sol_types::SolEvent;
//!
//! let logs = provider.get_logs(&filter.event_signature(Trade::SIGNATURE_HASH)).await?;
//!
//! for log in logs {
//!     let trade = Trade::decode_log(&log.inner)?;
//!     println!("{} sold {} for {}", trade.owner, trade.sellToken, trade.buyToken);
//! }
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// Settlement `Trade` event
    ///
    /// Emitted once per order executed in a settlement batch.
    ///
    /// # Fields
    ///
    /// - `owner`: Order owner (indexed)
    /// - `sellToken`: Token sold by the owner
    /// - `buyToken`: Token bought by the owner (the native-asset sentinel for native currency)
    /// - `sellAmount`: Amount sold, including fees
    /// - `buyAmount`: Amount bought
    /// - `feeAmount`: Fee paid in sell token
    /// - `orderUid`: Unique order identifier
    event Trade(
        address indexed owner,
        address sellToken,
        address buyToken,
        uint256 sellAmount,
        uint256 buyAmount,
        uint256 feeAmount,
        bytes orderUid
    );
}

impl Debug for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Trade(owner: {}, sell: {} {}, buy: {} {}, fee: {})",
            self.owner,
            self.sellAmount,
            self.sellToken,
            self.buyAmount,
            self.buyToken,
            self.feeAmount
        )
    }
}
