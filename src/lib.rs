//! # tokseek
//!
//! Knuth-Morris-Pratt search over sequences of tokens.
//!
//! ## The Problem
//!
//! Text that has been through OCR, a tokenizer, or a layout engine is no
//! longer a string: it is a list of words, each with its own baggage. Finding
//! a phrase means finding a *run of tokens*, and "this token matches that
//! one" is rarely plain equality. A page word `"rust."` should match the
//! query word `"rust"`.
//!
//! The naive approach re-checks every alignment:
//!
//! ```text
//! haystack: [a, a, a, a, a, b]     needle: [a, a, b]
//!
//! align 0: a a a        mismatch at 2
//! align 1:   a a a      mismatch at 2   <- re-reads two tokens already seen
//! align 2:     a a a    ...
//! ```
//!
//! That is `O(n × m)` predicate calls.
//!
//! ## The KMP Idea
//!
//! When `j` needle tokens have matched and the next one fails, the matched
//! part of the haystack *is* `needle[..j]`. How far the needle may slide is
//! therefore a property of the needle alone, precomputed once as the
//! prefix table (`lps`, "longest proper prefix that is also a suffix"):
//!
//! ```text
//! needle: [a, a, b]
//! lps:    [0, 1, 0]
//!
//! after "a a" then mismatch: keep 1 matched token, never rewind the haystack
//! ```
//!
//! Each haystack token is read once: `O(n + m)` predicate calls.
//!
//! ## Token Predicates
//!
//! Both the prefix table and the scan consult one [`TokenMatcher`]. The
//! canonical one is [`Contains`] (a haystack token matches a needle token it
//! contains as a substring); [`Exact`] and [`IgnoreCase`] are equivalence
//! relations and make the search complete. Any `Fn(&str, &str) -> bool`
//! works too. See the [`matcher`] module docs for the trade-off.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokseek::{kmp_search, Exact, Pattern};
//!
//! // Every haystack index covered by an occurrence
//! let indices = kmp_search(&["aaa", "aaa", "aaa", "aaa"], &["aa", "aa"]);
//! assert_eq!(indices, vec![0, 1, 2, 3]);
//!
//! // Compile once, search many; get spans instead of indices
//! let pattern = Pattern::with_matcher(["not", "to", "be"], Exact);
//! let spans = pattern.find_spans(&["to", "be", "or", "not", "to", "be"]);
//! assert_eq!(spans[0].start, 3);
//! ```
//!
//! ## Phrase Search
//!
//! ```rust
//! use tokseek::PhraseQuery;
//!
//! let query = PhraseQuery::parse("Lazy dog").unwrap();
//! let page = ["over", "the", "LAZY", "dog!"];
//! assert_eq!(query.find_in(&page)[0].range(), 2..4);
//! ```
//!
//! ## Result Shapes
//!
//! | Call | Returns |
//! |------|---------|
//! | [`Pattern::find_iter`] | lazy [`MatchSpan`]s |
//! | [`Pattern::find_spans`] | `Vec<MatchSpan>` |
//! | [`Pattern::find_starts`] | start index per occurrence |
//! | [`Pattern::search`], [`kmp_search`] | every covered index, ascending |
//!
//! [`expanded_indices`] keeps one full index run per occurrence, repeats
//! included.

mod error;
mod expand;
pub mod matcher;
mod pattern;
mod phrase;
mod prefix;
mod span;

pub use error::{Error, Result};
pub use expand::{covered_indices, expanded_indices, start_indices};
pub use matcher::{Contains, Exact, IgnoreCase};
pub use pattern::{Matches, Pattern};
pub use phrase::{normalize, tokenize, PhraseQuery};
pub use prefix::{prefix_table, prefix_table_by};
pub use span::MatchSpan;

/// A binary predicate deciding whether a haystack token matches a needle token.
///
/// Implementations must be pure: same inputs, same answer.
///
/// ```rust
/// use tokseek::{kmp_search_by, TokenMatcher};
///
/// struct Prefix;
///
/// impl TokenMatcher for Prefix {
///     fn matches(&self, candidate: &str, pattern: &str) -> bool {
///         candidate.starts_with(pattern)
///     }
/// }
///
/// let hits = kmp_search_by(&["rusty", "nail"], &["rust", "na"], &Prefix);
/// assert_eq!(hits, vec![0, 1]);
/// ```
pub trait TokenMatcher: Send + Sync {
    /// Whether `candidate` (from the haystack) satisfies `pattern` (from the needle).
    fn matches(&self, candidate: &str, pattern: &str) -> bool;
}

/// Find `needle` in `haystack` by substring containment and return every
/// haystack index covered by an occurrence, ascending.
///
/// Total over all inputs: an empty needle, or one longer than the haystack,
/// gives an empty result.
///
/// ```rust
/// use tokseek::kmp_search;
///
/// assert_eq!(kmp_search(&["x", "y", "z"], &["y"]), vec![1]);
/// assert!(kmp_search::<&str, &str>(&[], &["a"]).is_empty());
/// ```
#[must_use]
pub fn kmp_search<H, N>(haystack: &[H], needle: &[N]) -> Vec<usize>
where
    H: AsRef<str>,
    N: AsRef<str>,
{
    kmp_search_by(haystack, needle, &Contains)
}

/// Like [`kmp_search`], with `matcher` used for both the prefix table and the scan.
#[must_use]
pub fn kmp_search_by<H, N, M>(haystack: &[H], needle: &[N], matcher: &M) -> Vec<usize>
where
    H: AsRef<str>,
    N: AsRef<str>,
    M: TokenMatcher + ?Sized,
{
    if needle.is_empty() || haystack.len() < needle.len() {
        return Vec::new();
    }
    let needle = needle.iter().map(|token| token.as_ref());
    Pattern::with_matcher(needle, ByRef(matcher)).search(haystack)
}

/// Lends a borrowed matcher to a [`Pattern`] without cloning it.
struct ByRef<'a, M: ?Sized>(&'a M);

impl<M: TokenMatcher + ?Sized> TokenMatcher for ByRef<'_, M> {
    #[inline]
    fn matches(&self, candidate: &str, pattern: &str) -> bool {
        self.0.matches(candidate, pattern)
    }
}
