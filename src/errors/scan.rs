// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for traded token scans.

use alloy_primitives::BlockNumber;

use super::LogQueryError;

/// Errors that can occur while scanning a block range for traded tokens.
///
/// # Examples
///
/// ```rust,ignore
/// use traded_tokens::{ScanError, TradedTokensScanner};
///
/// match scanner.scan(from_block, to_block).await {
///     Ok(tokens) => println!("Found {} tokens", tokens.len()),
///     Err(ScanError::UnsplittableOverflow { block, .. }) => {
///         eprintln!("Block {block} alone exceeds the provider's result cap");
///     }
///     Err(e) => eprintln!("Scan failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A single block holds more events than the provider will return at once.
    ///
    /// The range cannot be split any further, so the data cannot be fetched
    /// atomically regardless of range size.
    #[error("Too many events in the same block {block}: {message}")]
    UnsplittableOverflow {
        /// The block that overflowed
        block: BlockNumber,
        /// Provider message, kept verbatim
        message: String,
    },

    /// The log query failed for a reason other than an overflow.
    #[error(transparent)]
    Query(#[from] LogQueryError),

    /// A returned log could not be decoded as a settlement `Trade` event.
    #[error("Failed to decode Trade event in block {block:?}: {details}")]
    DecodeFailed {
        /// Block the log was emitted in, if the provider reported it
        block: Option<BlockNumber>,
        /// Details about why the decode failed
        details: String,
    },

    /// The requested range is empty (`from_block > to_block`).
    #[error("Invalid block range: from_block {from_block} is after to_block {to_block}")]
    InvalidRange {
        /// Requested start block
        from_block: BlockNumber,
        /// Requested end block
        to_block: BlockNumber,
    },
}

impl ScanError {
    /// Create an `UnsplittableOverflow` error for a block.
    pub fn unsplittable_overflow(block: BlockNumber, message: impl Into<String>) -> Self {
        ScanError::UnsplittableOverflow {
            block,
            message: message.into(),
        }
    }

    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(block: Option<BlockNumber>, details: impl Into<String>) -> Self {
        ScanError::DecodeFailed {
            block,
            details: details.into(),
        }
    }
}
