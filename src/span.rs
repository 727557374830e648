//! The MatchSpan type: one occurrence of a needle in a haystack.

/// One occurrence of a needle, as a half-open range of haystack indices.
///
/// ## Token Indices
///
/// `start` and `end` index the haystack *sequence*, not bytes of any token:
///
/// ```rust
/// use tokseek::MatchSpan;
///
/// let haystack = ["the", "quick", "brown", "fox"];
/// let span = MatchSpan::new(1, 3);
///
/// assert_eq!(&haystack[span.range()], &["quick", "brown"]);
/// ```
///
/// ## Overlap
///
/// Spans reported by one search may overlap. With needle `[a, a]`:
///
/// ```text
/// Haystack: [a, a, a]
/// Span 0:   [a, a]        [0..2]
/// Span 1:      [a, a]     [1..3]  <- shares index 1 with span 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchSpan {
    /// Haystack index of the first matched token.
    pub start: usize,
    /// Haystack index one past the last matched token.
    pub end: usize,
}

impl MatchSpan {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The span of a match of `len` tokens that ends at haystack index `last`.
    #[must_use]
    pub(crate) const fn ending_at(last: usize, len: usize) -> Self {
        Self::new(last + 1 - len, last + 1)
    }

    /// Number of tokens covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The covered haystack indices.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Whether `other` shares at least one index with this span.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for MatchSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<MatchSpan> for std::ops::Range<usize> {
    fn from(span: MatchSpan) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending_at() {
        let span = MatchSpan::ending_at(4, 3);
        assert_eq!(span, MatchSpan::new(2, 5));
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_overlaps() {
        let a = MatchSpan::new(0, 2);
        assert!(a.overlaps(&MatchSpan::new(1, 3)));
        assert!(!a.overlaps(&MatchSpan::new(2, 4)));
    }

    #[test]
    fn test_empty_span() {
        assert!(MatchSpan::new(3, 3).is_empty());
        assert!(!MatchSpan::new(3, 4).is_empty());
    }

    #[test]
    fn test_into_range() {
        let range: std::ops::Range<usize> = MatchSpan::new(1, 4).into();
        assert_eq!(range, 1..4);
        assert_eq!(range.len(), MatchSpan::new(1, 4).len());
    }

    #[test]
    fn test_display() {
        assert_eq!(MatchSpan::new(3, 5).to_string(), "3..5");
    }
}
