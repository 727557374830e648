//! Phrase search over word tokens.
//!
//! ## The Problem
//!
//! A user types `"Closures, in Rust!"` and wants to find it inside a page that
//! has already been split into words, each carrying its own metadata (page
//! coordinates, say). Raw strings don't line up: case differs, punctuation
//! clings to words, `ё` and `е` are used interchangeably.
//!
//! ## The Approach
//!
//! Normalize both sides the same way, tokenize the phrase, and run the KMP
//! scan over the page's words:
//!
//! ```text
//! phrase:  "Closures, in Rust!"  ->  [closures, in, rust]
//! words:   [Chapter, 13:, Closures, in, Rust.]
//!       -> [chapter, 13, closures, in, rust]
//!                       ^^^^^^^^^^^^^^^^^^^ 2..5
//! ```
//!
//! Normalization keeps `a-z`, `0-9` and `а-я`; everything else becomes a
//! separator.
//!
//! ## Containment vs Whole Words
//!
//! By default a phrase word matches any page word *containing* it, so
//! `"rust"` finds `"rustacean"`. That also means `"br"` finds `"break"`.
//! [`PhraseQuery::whole_words`] switches to exact word equality.

use unicode_segmentation::UnicodeSegmentation;

use crate::{Contains, Error, Exact, MatchSpan, Pattern, Result, TokenMatcher};

/// Lowercase `text`, fold `ё` into `е`, and reduce it to single-space
/// separated runs of `[a-z0-9а-я]`.
///
/// ```rust
/// use tokseek::normalize;
///
/// assert_eq!(normalize("  Hello,   WORLD!! "), "hello world");
/// assert_eq!(normalize("Ёлка-2024"), "елка 2024");
/// assert_eq!(normalize("¿?"), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars().flat_map(char::to_lowercase) {
        let c = if c == 'ё' { 'е' } else { c };
        if is_word_char(c) {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ('а'..='я').contains(&c)
}

/// Normalize `text` and split it into word tokens.
///
/// ```rust
/// use tokseek::tokenize;
///
/// assert_eq!(tokenize("Привет, мир! Hi-5"), vec!["привет", "мир", "hi", "5"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .unicode_words()
        .map(str::to_owned)
        .collect()
}

/// A parsed phrase, ready to be searched for in word sequences.
///
/// ## Example
///
/// ```rust
/// use tokseek::{MatchSpan, PhraseQuery};
///
/// let query = PhraseQuery::parse("Closures, in Rust!").unwrap();
/// let words = ["Chapter", "13:", "Closures", "in", "Rust."];
///
/// assert_eq!(query.find_in(&words), vec![MatchSpan::new(2, 5)]);
/// ```
#[derive(Debug, Clone)]
pub struct PhraseQuery<M = Contains> {
    phrase: String,
    pattern: Pattern<M>,
}

impl PhraseQuery<Contains> {
    /// Parse a phrase; page words match when they contain a phrase word.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPhrase`] if nothing searchable is left after
    /// normalization.
    pub fn parse(phrase: impl Into<String>) -> Result<Self> {
        let phrase = phrase.into();
        let tokens = tokenize(&phrase);
        if tokens.is_empty() {
            return Err(Error::EmptyPhrase { phrase });
        }
        log::debug!("parsed phrase {:?} into {:?}", phrase, tokens);
        Ok(Self {
            phrase,
            pattern: Pattern::new(tokens),
        })
    }

    /// Require page words to equal phrase words exactly (after normalization).
    ///
    /// ```rust
    /// use tokseek::PhraseQuery;
    ///
    /// let words = ["break", "the", "br"];
    /// let loose = PhraseQuery::parse("br").unwrap();
    /// assert_eq!(loose.find_in(&words).len(), 2);
    ///
    /// let strict = loose.whole_words();
    /// assert_eq!(strict.find_in(&words).len(), 1);
    /// ```
    #[must_use]
    pub fn whole_words(self) -> PhraseQuery<Exact> {
        let Self { phrase, pattern } = self;
        PhraseQuery {
            phrase,
            pattern: Pattern::with_matcher(pattern.needle().to_vec(), Exact),
        }
    }
}

impl<M: TokenMatcher> PhraseQuery<M> {
    /// The phrase as given.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The normalized phrase words.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        self.pattern.needle()
    }

    /// The compiled pattern behind this query.
    #[must_use]
    pub fn pattern(&self) -> &Pattern<M> {
        &self.pattern
    }

    /// Find the phrase in a sequence of raw words.
    ///
    /// Each word is normalized before matching; spans index `words`.
    ///
    /// A word that normalizes to several parts (`"foo-bar"` -> `"foo bar"`)
    /// stays one token. It can match a phrase word only by containment, so it
    /// never matches under [`whole_words`](PhraseQuery::whole_words), and a
    /// multi-word phrase never matches it on its own.
    #[must_use]
    pub fn find_in<T: AsRef<str>>(&self, words: &[T]) -> Vec<MatchSpan> {
        let normalized: Vec<String> = words.iter().map(|w| normalize(w.as_ref())).collect();
        self.pattern.find_spans(&normalized)
    }

    /// Tokenize `text` and find the phrase in it.
    ///
    /// Spans index the tokens returned by [`tokenize`].
    #[must_use]
    pub fn find_in_text(&self, text: &str) -> Vec<MatchSpan> {
        self.pattern.find_spans(&tokenize(text))
    }

    /// Find the phrase in records that each carry one word, returning the
    /// matched record slices.
    ///
    /// ```rust
    /// use tokseek::PhraseQuery;
    ///
    /// struct Word { text: &'static str, x: u32 }
    ///
    /// let page = [
    ///     Word { text: "Hello", x: 10 },
    ///     Word { text: "brave", x: 60 },
    ///     Word { text: "world", x: 110 },
    /// ];
    /// let query = PhraseQuery::parse("brave world").unwrap();
    ///
    /// let hits = query.occurrences(&page, |w| w.text);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0][0].x, 60);
    /// ```
    #[must_use]
    pub fn occurrences<'w, W, F>(&self, records: &'w [W], word_of: F) -> Vec<&'w [W]>
    where
        F: Fn(&W) -> &str,
    {
        let normalized: Vec<String> = records.iter().map(|r| normalize(word_of(r))).collect();
        self.pattern
            .find_iter(&normalized)
            .map(|span| &records[span.range()])
            .collect()
    }
}
