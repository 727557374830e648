//! Built-in token predicates.
//!
//! A [`TokenMatcher`] decides whether one haystack token satisfies one needle
//! token. The same predicate drives both the prefix table and the scan, so a
//! [`Pattern`](crate::Pattern) never mixes two notions of "match".
//!
//! | Matcher | Haystack token matches needle token when | Equivalence? |
//! |---------|-------------------------------------------|--------------|
//! | [`Exact`] | the strings are byte-equal | yes |
//! | [`IgnoreCase`] | the strings are equal after Unicode lowercasing | yes |
//! | [`Contains`] | the haystack token contains the needle token as a substring | no |
//!
//! ## Completeness
//!
//! KMP only skips alignments it has proven cannot match. That proof is exact
//! when the predicate is an equivalence relation, so [`Exact`] and
//! [`IgnoreCase`] report every occurrence.
//!
//! [`Contains`] is transitive (`"abc" ⊇ "ab" ⊇ "b"`) but not symmetric, so the
//! prefix table still never produces a false positive, yet a fallback can
//! step over an alignment that would have matched:
//!
//! ```text
//! needle:   ["x", "y"]        lps = [0, 0]   ("y" does not contain "x")
//! haystack: ["x", "xy", "y"]
//!
//! reported: 0..2
//! skipped:  1..3   ("xy" contains "x", "y" contains "y")
//! ```
//!
//! Reported spans are always genuine matches; for inputs where the needle's
//! tokens contain one another, some occurrences may go unreported.

use crate::TokenMatcher;

/// Byte-for-byte token equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl TokenMatcher for Exact {
    #[inline]
    fn matches(&self, candidate: &str, pattern: &str) -> bool {
        candidate == pattern
    }
}

/// Substring containment: the haystack token contains the needle token.
///
/// This is the canonical predicate used by [`kmp_search`](crate::kmp_search).
/// An empty needle token is contained in every haystack token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contains;

impl TokenMatcher for Contains {
    #[inline]
    fn matches(&self, candidate: &str, pattern: &str) -> bool {
        candidate.contains(pattern)
    }
}

/// Token equality after Unicode lowercasing.
///
/// ```rust
/// use tokseek::{IgnoreCase, TokenMatcher};
///
/// assert!(IgnoreCase.matches("Straße", "straße"));
/// assert!(IgnoreCase.matches("ПРИВЕТ", "привет"));
/// assert!(!IgnoreCase.matches("hello", "hell"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreCase;

impl TokenMatcher for IgnoreCase {
    fn matches(&self, candidate: &str, pattern: &str) -> bool {
        candidate
            .chars()
            .flat_map(char::to_lowercase)
            .eq(pattern.chars().flat_map(char::to_lowercase))
    }
}

impl<F> TokenMatcher for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, candidate: &str, pattern: &str) -> bool {
        self(candidate, pattern)
    }
}
