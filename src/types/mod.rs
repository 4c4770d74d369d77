// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for block ranges and traded token sets.

pub mod block_range;
pub mod tokens;

pub use block_range::BlockRange;
pub use tokens::{TradedPair, TradedTokens};
