//! Concrete search scenarios.
//!
//! Fixed inputs with hand-checked outputs, covering the reference
//! demonstration, overlap handling, and phrase search over laid-out words.

use tokseek::{
    expanded_indices, kmp_search, kmp_search_by, start_indices, Error, Exact, MatchSpan, Pattern,
    PhraseQuery,
};

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn repeated_tokens_cover_contiguous_run() {
    let haystack = ["aaa", "aaa", "aaa", "aaa"];
    let needle = ["aa", "aa"];

    assert_eq!(kmp_search(&haystack, &needle), vec![0, 1, 2, 3]);
}

#[test]
fn repeated_tokens_one_span_per_occurrence() {
    let haystack = ["aaa", "aaa", "aaa", "aaa"];
    let spans = Pattern::new(["aa", "aa"]).find_spans(&haystack);

    assert_eq!(start_indices(spans.clone()), vec![0, 1, 2]);
    assert_eq!(expanded_indices(spans), vec![0, 1, 1, 2, 2, 3]);
}

#[test]
fn single_token_needle() {
    let pattern = Pattern::new(["y"]);
    assert_eq!(pattern.lps(), &[0]);
    assert_eq!(kmp_search(&["x", "y", "z"], &["y"]), vec![1]);
}

#[test]
fn empty_haystack() {
    let empty: [&str; 0] = [];
    assert!(kmp_search(&empty, &["a"]).is_empty());
}

#[test]
fn absent_needle() {
    assert!(kmp_search(&["alpha", "beta", "gamma"], &["beta", "alpha"]).is_empty());
    assert!(kmp_search(&["alpha", "beta"], &["delta"]).is_empty());
}

#[test]
fn overlapping_occurrences_in_discovery_order() {
    // needle occurs at 0 and 2, sharing index 2
    let haystack = ["a", "b", "a", "b", "a", "c"];
    let pattern = Pattern::with_matcher(["a", "b", "a"], Exact);

    assert_eq!(
        pattern.find_spans(&haystack),
        vec![MatchSpan::new(0, 3), MatchSpan::new(2, 5)]
    );
    assert_eq!(pattern.search(&haystack), vec![0, 1, 2, 3, 4]);
}

#[test]
fn repeated_search_has_no_hidden_state() {
    let pattern = Pattern::new(["to", "be"]);
    let haystack = ["to", "be", "or", "not", "to", "be"];

    let first = pattern.search(&haystack);
    let second = pattern.search(&haystack);
    assert_eq!(first, second);
    assert_eq!(first, vec![0, 1, 4, 5]);
}

// =============================================================================
// Predicate Choice
// =============================================================================

#[test]
fn containment_matches_inside_tokens() {
    let haystack = ["unbreakable", "promise"];
    assert_eq!(kmp_search(&haystack, &["break", "rom"]), vec![0, 1]);
    assert!(kmp_search_by(&haystack, &["break", "rom"], &Exact).is_empty());
}

#[test]
fn closure_predicate() {
    let suffix = |candidate: &str, pattern: &str| candidate.ends_with(pattern);
    let haystack = ["walked", "talking", "jumped"];
    assert_eq!(kmp_search_by(&haystack, &["ed"], &suffix), vec![0, 2]);
}

#[test]
fn containment_may_skip_nested_alignment() {
    // "xy" contains "x", but the fallback from the first match never revisits it
    let haystack = ["x", "xy", "y"];
    let spans = Pattern::new(["x", "y"]).find_spans(&haystack);
    assert_eq!(spans, vec![MatchSpan::new(0, 2)]);
}

// =============================================================================
// Phrase Search
// =============================================================================

#[derive(Debug)]
struct PageWord {
    word: &'static str,
    x: u32,
    y: u32,
}

fn page() -> Vec<PageWord> {
    let mut words = vec![
        PageWord { word: "Lecture", x: 10, y: 10 },
        PageWord { word: "3:", x: 90, y: 10 },
        PageWord { word: "Типы", x: 10, y: 40 },
        PageWord { word: "данных", x: 70, y: 40 },
        PageWord { word: "в", x: 150, y: 40 },
        PageWord { word: "Rust.", x: 170, y: 40 },
        PageWord { word: "Типы", x: 10, y: 70 },
        PageWord { word: "данных:", x: 70, y: 70 },
    ];
    // reading order: top to bottom, then left to right
    words.sort_by_key(|w| (w.y, w.x));
    words
}

#[test]
fn phrase_found_on_every_line() {
    let page = page();
    let query = PhraseQuery::parse("типы ДАННЫХ").unwrap();

    let hits = query.occurrences(&page, |w| w.word);
    let origins: Vec<(u32, u32)> = hits.iter().map(|hit| (hit[0].x, hit[0].y)).collect();
    assert_eq!(origins, vec![(10, 40), (10, 70)]);
}

#[test]
fn phrase_with_punctuation_and_digits() {
    let page = page();
    let query = PhraseQuery::parse("lecture 3").unwrap();
    let words: Vec<&str> = page.iter().map(|w| w.word).collect();

    assert_eq!(query.find_in(&words), vec![MatchSpan::new(0, 2)]);
}

#[test]
fn phrase_yo_folds_to_ye() {
    let query = PhraseQuery::parse("ещё").unwrap();
    let spans = query.find_in_text("Ещё раз, еще раз");
    assert_eq!(spans, vec![MatchSpan::new(0, 1), MatchSpan::new(2, 3)]);
}

#[test]
fn phrase_without_words_is_rejected() {
    assert!(matches!(
        PhraseQuery::parse(" -- "),
        Err(Error::EmptyPhrase { .. })
    ));
}
