//! Prefix-function (failure table) construction.
//!
//! `lps[i]` is the length of the longest proper prefix of `needle[..=i]` that
//! is also a suffix of it. After a mismatch with `j` tokens matched, the scan
//! resumes at `lps[j - 1]` instead of restarting from zero.
//!
//! ```text
//! needle: [a, b, a, b, c]
//! lps:    [0, 0, 1, 2, 0]
//!                ^  ^
//!                |  "ab" is both prefix and suffix of "abab"
//!                "a" is both prefix and suffix of "aba"
//! ```

use crate::TokenMatcher;

/// Build the prefix table using exact equality between tokens.
///
/// Works for any `PartialEq` token type. Returns an empty table for an
/// empty needle.
///
/// ```rust
/// use tokseek::prefix_table;
///
/// assert_eq!(prefix_table(&["a", "b", "a", "b", "c"]), vec![0, 0, 1, 2, 0]);
/// assert_eq!(prefix_table::<&str>(&[]), Vec::<usize>::new());
/// ```
#[must_use]
pub fn prefix_table<T: PartialEq>(needle: &[T]) -> Vec<usize> {
    build(needle.len(), |i, j| needle[i] == needle[j])
}

/// Build the prefix table with `matcher` standing in for equality.
///
/// Token `needle[i]` plays the haystack role and `needle[j]` the needle role,
/// mirroring how the scan later calls `matcher.matches(haystack[i], needle[j])`.
///
/// ```rust
/// use tokseek::{prefix_table_by, Contains, Exact};
///
/// let needle = ["ab", "abc"];
/// assert_eq!(prefix_table_by(&needle, &Exact), vec![0, 0]);
/// assert_eq!(prefix_table_by(&needle, &Contains), vec![0, 1]);
/// ```
#[must_use]
pub fn prefix_table_by<T, M>(needle: &[T], matcher: &M) -> Vec<usize>
where
    T: AsRef<str>,
    M: TokenMatcher + ?Sized,
{
    build(needle.len(), |i, j| {
        matcher.matches(needle[i].as_ref(), needle[j].as_ref())
    })
}

/// Shared construction loop. `same(i, j)` compares needle positions `i > j`.
fn build(len: usize, mut same: impl FnMut(usize, usize) -> bool) -> Vec<usize> {
    let mut lps = vec![0; len];
    let mut j = 0;

    for i in 1..len {
        while j > 0 && !same(i, j) {
            j = lps[j - 1];
        }
        if same(i, j) {
            j += 1;
        }
        lps[i] = j;
    }

    lps
}
