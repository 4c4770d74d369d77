// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Closed block ranges and their binary split

use alloy_primitives::BlockNumber;

use crate::errors::ScanError;

/// A closed interval `[from_block, to_block]` of block numbers
///
/// Construction guarantees `from_block <= to_block`, so a range always holds
/// at least one block.
///
/// # Examples
///
/// ```
/// use traded_tokens::BlockRange;
///
/// let range = BlockRange::new(100, 103).unwrap();
/// assert_eq!(range.block_count(), 4);
///
/// let (lower, upper) = range.split().unwrap();
/// assert_eq!((lower.from_block(), lower.to_block()), (100, 101));
/// assert_eq!((upper.from_block(), upper.to_block()), (102, 103));
///
/// assert!(BlockRange::single(50).split().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockRange {
    from_block: BlockNumber,
    to_block: BlockNumber,
}

impl BlockRange {
    /// Create a range, rejecting `from_block > to_block`
    pub fn new(from_block: BlockNumber, to_block: BlockNumber) -> Result<Self, ScanError> {
        if from_block > to_block {
            return Err(ScanError::InvalidRange {
                from_block,
                to_block,
            });
        }
        Ok(Self {
            from_block,
            to_block,
        })
    }

    /// Create a range covering exactly one block
    pub const fn single(block: BlockNumber) -> Self {
        Self {
            from_block: block,
            to_block: block,
        }
    }

    /// First block of the range (inclusive)
    pub const fn from_block(&self) -> BlockNumber {
        self.from_block
    }

    /// Last block of the range (inclusive)
    pub const fn to_block(&self) -> BlockNumber {
        self.to_block
    }

    /// Number of blocks covered, saturating at `u64::MAX` for `[0, u64::MAX]`
    pub const fn block_count(&self) -> u64 {
        (self.to_block - self.from_block).saturating_add(1)
    }

    pub const fn is_single_block(&self) -> bool {
        self.from_block == self.to_block
    }

    pub const fn contains(&self, block: BlockNumber) -> bool {
        self.from_block <= block && block <= self.to_block
    }

    /// `floor((from_block + to_block) / 2)`, computed without overflowing
    pub const fn midpoint(&self) -> BlockNumber {
        self.from_block + (self.to_block - self.from_block) / 2
    }

    /// Split into `[from_block, mid]` and `[mid + 1, to_block]`
    ///
    /// Returns `None` for a single block. Flooring the midpoint keeps
    /// `mid + 1 <= to_block`, so both halves are non-empty, disjoint, jointly
    /// cover the range, and are strictly smaller than it.
    pub const fn split(&self) -> Option<(BlockRange, BlockRange)> {
        if self.is_single_block() {
            return None;
        }
        let mid = self.midpoint();
        Some((
            BlockRange {
                from_block: self.from_block,
                to_block: mid,
            },
            BlockRange {
                from_block: mid + 1,
                to_block: self.to_block,
            },
        ))
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from_block, self.to_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_inverted_range() {
        let err = BlockRange::new(10, 9).unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidRange {
                from_block: 10,
                to_block: 9
            }
        ));
    }

    #[test]
    fn test_single_block() {
        let range = BlockRange::single(50);
        assert!(range.is_single_block());
        assert_eq!(range.block_count(), 1);
        assert_eq!(range, BlockRange::new(50, 50).unwrap());
        assert!(range.split().is_none());
    }

    #[test]
    fn test_split_two_blocks() {
        let (lower, upper) = BlockRange::new(7, 8).unwrap().split().unwrap();
        assert_eq!(lower, BlockRange::single(7));
        assert_eq!(upper, BlockRange::single(8));
    }

    #[test]
    fn test_split_odd_length_puts_extra_block_in_upper_half() {
        let (lower, upper) = BlockRange::new(0, 1000).unwrap().split().unwrap();
        assert_eq!(lower, BlockRange::new(0, 500).unwrap());
        assert_eq!(upper, BlockRange::new(501, 1000).unwrap());
    }

    #[test]
    fn test_split_near_u64_max_does_not_overflow() {
        let range = BlockRange::new(u64::MAX - 1, u64::MAX).unwrap();
        let (lower, upper) = range.split().unwrap();
        assert_eq!(lower, BlockRange::single(u64::MAX - 1));
        assert_eq!(upper, BlockRange::single(u64::MAX));
    }

    #[test]
    fn test_full_range_block_count_saturates() {
        let range = BlockRange::new(0, u64::MAX).unwrap();
        assert_eq!(range.block_count(), u64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockRange::new(100, 103).unwrap().to_string(), "100-103");
    }

    proptest! {
        #[test]
        fn prop_split_partitions_range(from in 0u64..1_000_000, len in 2u64..1_000_000) {
            let range = BlockRange::new(from, from + len - 1).unwrap();
            let (lower, upper) = range.split().unwrap();

            prop_assert_eq!(lower.from_block(), range.from_block());
            prop_assert_eq!(upper.to_block(), range.to_block());
            prop_assert_eq!(lower.to_block() + 1, upper.from_block());
            prop_assert_eq!(lower.block_count() + upper.block_count(), range.block_count());
            prop_assert!(lower.block_count() < range.block_count());
            prop_assert!(upper.block_count() < range.block_count());
        }

        #[test]
        fn prop_repeated_splitting_terminates_at_single_blocks(
            from in 0u64..1_000,
            len in 1u64..512,
        ) {
            let range = BlockRange::new(from, from + len - 1).unwrap();
            let mut pending = vec![range];
            let mut leaves = Vec::new();
            let mut steps = 0u64;

            while let Some(next) = pending.pop() {
                steps += 1;
                prop_assert!(steps < 2 * len + 1);
                match next.split() {
                    Some((lower, upper)) => {
                        pending.push(upper);
                        pending.push(lower);
                    }
                    None => leaves.push(next.from_block()),
                }
            }

            let expected: Vec<u64> = (from..from + len).collect();
            prop_assert_eq!(leaves, expected);
        }
    }
}
