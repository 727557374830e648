//! Turning match spans into flat index lists.
//!
//! The scan reports one [`MatchSpan`] per occurrence. Many callers want the
//! haystack positions themselves, e.g. to pull per-word metadata for every
//! matched word. This step is kept apart from the scan so start offsets stay
//! one call away.
//!
//! ```text
//! haystack: [aaa, aaa, aaa, aaa]     needle: [aa, aa]
//! spans:    0..2, 1..3, 2..4
//!
//! covered_indices:   [0, 1, 2, 3]
//! expanded_indices:  [0, 1, 1, 2, 2, 3]
//! start_indices:     [0, 1, 2]
//! ```
//!
//! [`expanded_indices`] and [`start_indices`] keep the order spans arrive in;
//! [`covered_indices`] accepts spans in any order.

use crate::MatchSpan;

/// Every haystack index covered by at least one span, ascending, each once.
///
/// Spans may come in any order, e.g. merged from several searches.
#[must_use]
pub fn covered_indices<I>(spans: I) -> Vec<usize>
where
    I: IntoIterator<Item = MatchSpan>,
{
    let mut spans: Vec<MatchSpan> = spans.into_iter().collect();
    spans.sort_unstable_by_key(|span| span.start);

    let mut indices = Vec::new();
    let mut next = 0;

    for span in spans {
        let from = span.start.max(next);
        indices.extend(from..span.end);
        next = next.max(span.end);
    }

    indices
}

/// Every index of every span, repeats kept: `m` entries per occurrence.
#[must_use]
pub fn expanded_indices<I>(spans: I) -> Vec<usize>
where
    I: IntoIterator<Item = MatchSpan>,
{
    spans.into_iter().flat_map(|span| span.range()).collect()
}

/// The start index of each span.
#[must_use]
pub fn start_indices<I>(spans: I) -> Vec<usize>
where
    I: IntoIterator<Item = MatchSpan>,
{
    spans.into_iter().map(|span| span.start).collect()
}
