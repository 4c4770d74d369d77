// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Detection of "too many results" provider errors
//!
//! Providers signal an oversized `eth_getLogs` result only through free-text
//! error messages, and every provider words it differently. The matcher holds
//! a list of case-sensitive regular expressions and reports a match if any of
//! them occurs anywhere in the message.

use std::sync::LazyLock;

use regex::Regex;

/// Message used by geth-derived nodes and Infura:
/// `query returned more than 10000 results`
pub const QUERY_RETURNED_MORE_THAN: &str = r"query returned more than \d* results";

/// Message used by some hosted providers when the result cap is hit, e.g.
/// `query exceeds max results 20000, retry with the range 100-200`
pub const EXCEEDS_MAX_RESULTS: &str = r"exceeds max results";

static DEFAULT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [QUERY_RETURNED_MORE_THAN, EXCEEDS_MAX_RESULTS]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("built-in overflow pattern is valid"))
        .collect()
});

/// Classifies provider error messages as result-set overflows
///
/// # Examples
///
/// ```rust
/// use traded_tokens::OverflowMatcher;
///
/// let matcher = OverflowMatcher::default();
/// assert!(matcher.is_match("query returned more than 10000 results"));
/// assert!(!matcher.is_match("connection refused"));
///
/// let custom = OverflowMatcher::default()
///     .with_pattern(r"Log response size exceeded")
///     .unwrap();
/// assert!(custom.is_match("Log response size exceeded. Use up to a 2K block range"));
/// ```
#[derive(Debug, Clone)]
pub struct OverflowMatcher {
    patterns: Vec<Regex>,
}

impl Default for OverflowMatcher {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}

impl OverflowMatcher {
    /// Create a matcher from custom patterns only, without the defaults
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| Regex::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Add one more pattern to the matcher
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.patterns.push(Regex::new(pattern)?);
        Ok(self)
    }

    /// Whether `message` reports a result-set overflow
    pub fn is_match(&self, message: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(message))
    }

    /// Whether `error` or any error in its source chain reports an overflow
    pub fn is_overflow_error(&self, error: &(dyn std::error::Error + 'static)) -> bool {
        let mut current = Some(error);
        while let Some(err) = current {
            if self.is_match(&err.to_string()) {
                return true;
            }
            current = err.source();
        }
        false
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}
