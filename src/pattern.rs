//! Compiled needles and the single-pass scan.
//!
//! ## How It Works
//!
//! ```text
//! needle:   [aa, aa]          lps: [0, 1]
//! haystack: [aaa, aaa, aaa, aaa]
//!
//! i=0  j 0 -> 1
//! i=1  j 1 -> 2  match 0..2, j = lps[1] = 1
//! i=2  j 1 -> 2  match 1..3, j = 1
//! i=3  j 1 -> 2  match 2..4, j = 1
//! ```
//!
//! Every haystack token is consumed exactly once. On a mismatch the progress
//! counter `j` falls back through the prefix table instead of rewinding the
//! haystack, so the scan does `O(n)` predicate calls in total.
//!
//! After a full match the counter also falls back, which is what lets
//! overlapping occurrences be found.

use std::iter::FusedIterator;

use crate::{
    covered_indices, prefix_table_by, Contains, Error, MatchSpan, Result, TokenMatcher,
};

/// A needle compiled for repeated searching.
///
/// The prefix table is computed once at construction and reused by every
/// search, so one `Pattern` can be run over many haystacks.
///
/// ## Example
///
/// ```rust
/// use tokseek::{Exact, MatchSpan, Pattern};
///
/// let pattern = Pattern::with_matcher(["to", "be"], Exact);
/// let haystack = ["to", "be", "or", "not", "to", "be"];
///
/// let spans = pattern.find_spans(&haystack);
/// assert_eq!(spans, vec![MatchSpan::new(0, 2), MatchSpan::new(4, 6)]);
/// ```
#[derive(Debug, Clone)]
pub struct Pattern<M = Contains> {
    needle: Vec<String>,
    lps: Vec<usize>,
    matcher: M,
}

impl Pattern<Contains> {
    /// Compile a needle matched by substring containment.
    ///
    /// An empty needle is accepted and never matches.
    #[must_use]
    pub fn new<I, S>(needle: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_matcher(needle, Contains)
    }

    /// Like [`Pattern::new`], but rejects an empty needle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyNeedle`] if `needle` yields no tokens.
    pub fn try_new<I, S>(needle: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::try_with_matcher(needle, Contains)
    }
}

impl<M: TokenMatcher> Pattern<M> {
    /// Compile a needle with a custom token predicate.
    ///
    /// The predicate is used for both the prefix table and the scan.
    #[must_use]
    pub fn with_matcher<I, S>(needle: I, matcher: M) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let needle: Vec<String> = needle.into_iter().map(Into::into).collect();
        let lps = prefix_table_by(&needle, &matcher);
        log::trace!("compiled pattern of {} tokens, lps={:?}", needle.len(), lps);
        Self {
            needle,
            lps,
            matcher,
        }
    }

    /// Like [`Pattern::with_matcher`], but rejects an empty needle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyNeedle`] if `needle` yields no tokens.
    pub fn try_with_matcher<I, S>(needle: I, matcher: M) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = Self::with_matcher(needle, matcher);
        if pattern.is_empty() {
            return Err(Error::EmptyNeedle);
        }
        Ok(pattern)
    }

    /// The needle tokens.
    #[must_use]
    pub fn needle(&self) -> &[String] {
        &self.needle
    }

    /// The prefix table; same length as the needle.
    #[must_use]
    pub fn lps(&self) -> &[usize] {
        &self.lps
    }

    /// The token predicate.
    #[must_use]
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Number of needle tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.needle.len()
    }

    /// Whether the needle has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Lazily scan `haystack`, yielding each occurrence as it is found.
    ///
    /// Occurrences come out in order of their last token, overlapping ones
    /// included. An empty needle, or one longer than the haystack, yields
    /// nothing and never touches the haystack.
    ///
    /// ```rust
    /// use tokseek::Pattern;
    ///
    /// let pattern = Pattern::new(["aa", "aa"]);
    /// let haystack = ["aaa", "aaa", "aaa", "aaa"];
    ///
    /// let starts: Vec<usize> = pattern.find_iter(&haystack).map(|s| s.start).collect();
    /// assert_eq!(starts, vec![0, 1, 2]);
    /// ```
    pub fn find_iter<'p, 'h, T: AsRef<str>>(
        &'p self,
        haystack: &'h [T],
    ) -> Matches<'p, 'h, T, M> {
        // short-circuit: park the cursor at the end
        let pos = if self.is_empty() || haystack.len() < self.len() {
            haystack.len()
        } else {
            0
        };
        Matches {
            pattern: self,
            haystack,
            pos,
            matched: 0,
        }
    }

    /// All occurrences, in discovery order.
    #[must_use]
    pub fn find_spans<T: AsRef<str>>(&self, haystack: &[T]) -> Vec<MatchSpan> {
        let spans: Vec<MatchSpan> = self.find_iter(haystack).collect();
        log::debug!(
            "{} match(es) of {}-token needle in {}-token haystack",
            spans.len(),
            self.len(),
            haystack.len()
        );
        spans
    }

    /// Start index of every occurrence.
    #[must_use]
    pub fn find_starts<T: AsRef<str>>(&self, haystack: &[T]) -> Vec<usize> {
        self.find_iter(haystack).map(|span| span.start).collect()
    }

    /// Whether the needle occurs anywhere in `haystack`.
    #[must_use]
    pub fn is_match<T: AsRef<str>>(&self, haystack: &[T]) -> bool {
        self.find_iter(haystack).next().is_some()
    }

    /// Every haystack index covered by an occurrence, ascending.
    ///
    /// See [`covered_indices`] for how overlapping occurrences are merged.
    #[must_use]
    pub fn search<T: AsRef<str>>(&self, haystack: &[T]) -> Vec<usize> {
        covered_indices(self.find_spans(haystack))
    }
}

/// Iterator over the occurrences of a [`Pattern`] in a haystack.
///
/// Created by [`Pattern::find_iter`].
#[derive(Debug)]
pub struct Matches<'p, 'h, T, M> {
    pattern: &'p Pattern<M>,
    haystack: &'h [T],
    pos: usize,
    matched: usize,
}

impl<T: AsRef<str>, M: TokenMatcher> Iterator for Matches<'_, '_, T, M> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<MatchSpan> {
        let Pattern {
            needle,
            lps,
            matcher,
        } = self.pattern;
        let m = needle.len();

        while self.pos < self.haystack.len() {
            let i = self.pos;
            self.pos += 1;
            let token = self.haystack[i].as_ref();

            while self.matched > 0 && !matcher.matches(token, &needle[self.matched]) {
                self.matched = lps[self.matched - 1];
            }
            if matcher.matches(token, &needle[self.matched]) {
                self.matched += 1;
                if self.matched == m {
                    self.matched = lps[m - 1];
                    return Some(MatchSpan::ending_at(i, m));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at most one occurrence ends at each remaining position
        (0, Some(self.haystack.len() - self.pos))
    }
}

impl<T: AsRef<str>, M: TokenMatcher> FusedIterator for Matches<'_, '_, T, M> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Exact;

    #[test]
    fn test_reference_scenario() {
        let pattern = Pattern::new(["aa", "aa"]);
        let haystack = ["aaa", "aaa", "aaa", "aaa"];

        assert_eq!(
            pattern.find_spans(&haystack),
            vec![
                MatchSpan::new(0, 2),
                MatchSpan::new(1, 3),
                MatchSpan::new(2, 4)
            ]
        );
        assert_eq!(pattern.search(&haystack), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_token_needle() {
        let pattern = Pattern::new(["y"]);
        assert_eq!(pattern.lps(), &[0]);
        assert_eq!(pattern.search(&["x", "y", "z"]), vec![1]);
    }

    #[test]
    fn test_short_circuit() {
        let empty: [&str; 0] = [];
        assert!(Pattern::new(["a"]).find_spans(&empty).is_empty());
        assert!(Pattern::new(empty).find_spans(&["a", "b"]).is_empty());
        assert!(Pattern::new(empty).find_spans(&empty).is_empty());
        assert!(Pattern::new(["a", "b", "c"]).find_spans(&["a", "b"]).is_empty());
    }

    #[test]
    fn test_short_circuit_skips_predicate() {
        let calls = std::sync::atomic::AtomicUsize::new(0);
        let counting = |candidate: &str, pattern: &str| {
            calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            candidate == pattern
        };
        let pattern = Pattern::with_matcher(["a", "b", "c"], counting);
        let before = calls.load(std::sync::atomic::Ordering::Relaxed);

        assert!(pattern.find_spans(&["a", "b"]).is_empty());
        assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), before);
    }

    #[test]
    fn test_containment_scan() {
        let pattern = Pattern::new(["qu", "ck"]);
        let haystack = ["the", "quick", "duck", "quack"];
        assert_eq!(pattern.find_starts(&haystack), vec![1]);
    }

    #[test]
    fn test_exact_rejects_substrings() {
        let pattern = Pattern::with_matcher(["br"], Exact);
        assert!(!pattern.is_match(&["break", "brake"]));
        assert!(Pattern::new(["br"]).is_match(&["break", "brake"]));
    }

    #[test]
    fn test_fallback_after_partial_match() {
        let pattern = Pattern::with_matcher(["a", "a", "b"], Exact);
        let haystack = ["a", "a", "a", "b", "a", "a", "b"];
        assert_eq!(pattern.find_starts(&haystack), vec![1, 4]);
    }

    #[test]
    fn test_matcher_accessor() {
        assert_eq!(*Pattern::new(["a"]).matcher(), Contains);
        assert_eq!(*Pattern::with_matcher(["a"], Exact).matcher(), Exact);
    }

    #[test]
    fn test_reusable_across_haystacks() {
        let pattern = Pattern::with_matcher(["x"], Exact);
        assert_eq!(pattern.find_starts(&["x", "y"]), vec![0]);
        assert_eq!(pattern.find_starts(&["y", "x"]), vec![1]);
    }

    #[test]
    fn test_owned_haystack() {
        let haystack: Vec<String> = vec!["one".into(), "two".into(), "one".into()];
        assert_eq!(Pattern::new(["one"]).find_starts(&haystack), vec![0, 2]);
    }

    #[test]
    fn test_try_new_rejects_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(Pattern::try_new(empty), Err(Error::EmptyNeedle)));
        assert!(Pattern::try_new(["a"]).is_ok());
    }

    #[test]
    fn test_iterator_is_fused() {
        let pattern = Pattern::new(["a"]);
        let haystack = ["a"];
        let mut iter = pattern.find_iter(&haystack);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
