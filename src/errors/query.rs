// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for log queries.
//!
//! A log query can fail in two fundamentally different ways: the provider may
//! refuse to return the result because it is too large (recoverable by asking
//! for a smaller block range), or the query may fail for any other reason
//! (fatal for the scan).

use std::time::Duration;

use crate::types::BlockRange;

/// Errors returned by a [`LogQuery`](crate::LogQuery) implementation.
///
/// # Examples
///
/// ```rust
/// use traded_tokens::{BlockRange, LogQueryError};
///
/// let range = BlockRange::new(100, 200).unwrap();
/// let error = LogQueryError::overflow(range, "query returned more than 10000 results");
///
/// assert!(error.is_overflow());
/// assert_eq!(error.range(), range);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum LogQueryError {
    /// The provider refused to return more log entries than its cap.
    ///
    /// Recoverable by splitting the block range, unless the range is a
    /// single block.
    #[error("Too many results for blocks {range}: {message}")]
    Overflow {
        /// Block range that overflowed
        range: BlockRange,
        /// Provider message, kept verbatim
        message: String,
    },

    /// Any other provider failure (network, malformed request, outage).
    #[error("Failed to fetch logs for blocks {range}")]
    Upstream {
        /// Block range that was being queried
        range: BlockRange,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider did not answer within the configured timeout.
    #[error("Log query for blocks {range} timed out after {timeout:?}")]
    TimedOut {
        /// Block range that was being queried
        range: BlockRange,
        /// The timeout that elapsed
        timeout: Duration,
    },
}

impl LogQueryError {
    /// Create an `Overflow` error for a range.
    pub fn overflow(range: BlockRange, message: impl Into<String>) -> Self {
        LogQueryError::Overflow {
            range,
            message: message.into(),
        }
    }

    /// Create an `Upstream` error from any error type or message.
    pub fn upstream(
        range: BlockRange,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        LogQueryError::Upstream {
            range,
            source: source.into(),
        }
    }

    /// Create a `TimedOut` error.
    pub fn timed_out(range: BlockRange, timeout: Duration) -> Self {
        LogQueryError::TimedOut { range, timeout }
    }

    /// Block range the failed query covered.
    pub fn range(&self) -> BlockRange {
        match self {
            LogQueryError::Overflow { range, .. }
            | LogQueryError::Upstream { range, .. }
            | LogQueryError::TimedOut { range, .. } => *range,
        }
    }

    /// Whether the query collaborator already classified this as an overflow.
    pub fn is_overflow(&self) -> bool {
        matches!(self, LogQueryError::Overflow { .. })
    }

    /// Full rendered message, including every error in the source chain.
    ///
    /// Used for pattern-based overflow detection when a query implementation
    /// only reports free text.
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        message
    }
}
