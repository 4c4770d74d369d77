// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding settlement logs into traded token pairs

use alloy_primitives::B256;
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;

use crate::errors::ScanError;
use crate::events::definitions::Trade;
use crate::types::TradedPair;

/// Turns raw logs into the sell and buy tokens of a trade
///
/// The scanner queries logs for [`event_topic`](TradeDecoder::event_topic) and
/// passes each returned log to [`decode_trade`](TradeDecoder::decode_trade).
/// Implement this to scan a settlement contract with a different event layout.
pub trait TradeDecoder: Send + Sync {
    /// Topic 0 of the event to query for
    fn event_topic(&self) -> B256;

    /// Extract both legs of the trade recorded in `log`
    ///
    /// Logs returned for [`event_topic`](TradeDecoder::event_topic) are
    /// expected to decode; a failure aborts the scan.
    fn decode_trade(&self, log: &Log) -> Result<TradedPair, ScanError>;
}

/// Decoder for the settlement contract's [`Trade`] event
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementTradeDecoder;

impl TradeDecoder for SettlementTradeDecoder {
    fn event_topic(&self) -> B256 {
        Trade::SIGNATURE_HASH
    }

    fn decode_trade(&self, log: &Log) -> Result<TradedPair, ScanError> {
        let trade = Trade::decode_log(&log.inner)
            .map_err(|e| ScanError::decode_failed(log.block_number, e.to_string()))?;
        Ok(TradedPair::new(trade.sellToken, trade.buyToken))
    }
}
