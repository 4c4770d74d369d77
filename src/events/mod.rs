// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Settlement event processing.
//!
//! This module handles:
//! - The settlement `Trade` event definition
//! - Decoding trades into sell and buy tokens
//! - Adaptive range scanning that splits on provider result caps
//! - Provider-backed discovery helpers

pub mod decoder;
pub mod definitions;
pub mod discovery;
pub mod scanner;

pub use decoder::{SettlementTradeDecoder, TradeDecoder};
pub use definitions::Trade;
pub use discovery::{discover_traded_tokens, discover_traded_tokens_with_config};
pub use scanner::TradedTokensScanner;
