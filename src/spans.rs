//! Tracing span helpers for traded token scans.
//!
//! Telemetry concerns are kept out of the scanning logic: each instrumented
//! operation has a span helper here, and the operation attaches it with
//! `Instrument::instrument` so the span stays correct across `.await` points.
//!
//! Usage pattern:
//! ```rust,ignore
//! async move {
//!     // Business logic here
//! }
//! .instrument(spans::my_operation(param_value))
//! .await
//! ```

use alloy_primitives::Address;
use tracing::Span;

use crate::types::BlockRange;

/// Create span for a full traded token scan.
///
/// This is the main public API entry point.
///
/// Parent: None (root span for this operation)
/// Children: scan_range spans
#[inline]
pub(crate) fn scan_traded_tokens(contract: Address, range: BlockRange) -> Span {
    tracing::info_span!(
        "traded_tokens.scan",
        contract = %contract,
        from_block = range.from_block(),
        to_block = range.to_block(),
        block_count = range.block_count(),
    )
}

/// Create span for one log query and, on overflow, its two halves.
///
/// Parent: scan_traded_tokens span, or the scan_range span that split
/// Children: scan_range spans for each half after an overflow
#[inline]
pub(crate) fn scan_range(range: BlockRange, depth: u32) -> Span {
    tracing::debug_span!(
        "traded_tokens.scan_range",
        from_block = range.from_block(),
        to_block = range.to_block(),
        depth = depth,
    )
}
