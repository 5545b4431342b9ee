// src/tokenizer.rs

use std::collections::HashMap;

use crate::pattern;

/// How apostrophes are handled during normalization.
///
/// The upstream rule tables list the apostrophe in the punctuation scrub set,
/// so the literal behavior deletes every apostrophe, interior ones included
/// ("don't" becomes "dont"). The documented intent was to retain contractions;
/// both readings are offered here and the caller picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// `true` reproduces the literal scrub-everything behavior. `false`
    /// preserves interior apostrophes and only trims leading/trailing ones.
    pub strip_all_apostrophes: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            strip_all_apostrophes: true,
        }
    }
}

/// Splits raw text into an ordered list of normalized words and tallies a
/// frequency count per distinct word.
///
/// All output is computed eagerly in a single pass at construction time; the
/// instance is read-only afterward. Construction never fails: candidates that
/// cannot be resolved down to a valid word are discarded silently, and an
/// input with no valid words simply yields empty outputs.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    raw: String,
    options: TokenizerOptions,
    words: Vec<String>,
    word_counts: HashMap<String, usize>,
    total_wordcount: usize,
}

impl Tokenizer {
    /// Tokenizes `raw` with the default options (literal apostrophe stripping).
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_options(raw, TokenizerOptions::default())
    }

    /// Tokenizes `raw` with explicit apostrophe handling.
    pub fn with_options(raw: impl Into<String>, options: TokenizerOptions) -> Self {
        let mut tokenizer = Tokenizer {
            raw: raw.into(),
            options,
            words: Vec::new(),
            word_counts: HashMap::new(),
            total_wordcount: 0,
        };
        tokenizer.tokenize();
        tokenizer
    }

    /// Normalizes a space-delimited candidate and decides whether it is a
    /// valid word. Lowercases, scrubs punctuation and carriage returns, then
    /// runs the final word-shape check. Returns `None` if the candidate
    /// cannot be resolved down to a valid word.
    pub fn clean_word(candidate: &str, options: TokenizerOptions) -> Option<String> {
        let lowered = candidate.to_lowercase();
        let word = if options.strip_all_apostrophes {
            pattern::scrub(&pattern::SCRUB_ALL, &lowered)
        } else {
            pattern::scrub(&pattern::SCRUB_KEEP_APOSTROPHE, &lowered)
                .trim_matches('\'')
                .to_string()
        };
        if pattern::WORD_REGEX.is_match(&word) {
            Some(word)
        } else {
            None
        }
    }

    /// One pass over the raw text: split on the literal single space (NOT
    /// general whitespace; runs of spaces, tabs, and embedded newlines yield
    /// candidates that fail validation and are dropped), clean each candidate
    /// in order, and accumulate the word list and counts.
    fn tokenize(&mut self) {
        for candidate in self.raw.split(' ') {
            if let Some(clean) = Self::clean_word(candidate, self.options) {
                self.total_wordcount += 1;
                *self.word_counts.entry(clean.clone()).or_insert(0) += 1;
                self.words.push(clean);
            }
        }
    }

    /// The raw text this tokenizer was built from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Options this tokenizer was built with.
    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Accepted words in input order, duplicates retained.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Frequency count per distinct word.
    pub fn word_counts(&self) -> &HashMap<String, usize> {
        &self.word_counts
    }

    /// Number of occurrences of `word`, 0 if it never appeared.
    pub fn count(&self, word: &str) -> usize {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    /// Total number of accepted words, equal to `words().len()`.
    pub fn total_wordcount(&self) -> usize {
        self.total_wordcount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(candidate: &str) -> Option<String> {
        Tokenizer::clean_word(candidate, TokenizerOptions::default())
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(clean("Hello"), Some("hello".to_string()));
        assert_eq!(clean("HELLO"), Some("hello".to_string()));
        assert_eq!(clean("hello"), Some("hello".to_string()));
    }

    #[test]
    fn test_punctuation_stripping() {
        assert_eq!(clean("word."), Some("word".to_string()));
        assert_eq!(clean("word,"), Some("word".to_string()));
        assert_eq!(clean("word!"), Some("word".to_string()));
        assert_eq!(clean("(word)"), Some("word".to_string()));
    }

    #[test]
    fn test_carriage_returns_scrubbed() {
        assert_eq!(clean("word\n"), Some("word".to_string()));
        assert_eq!(clean("word\r\n"), Some("word".to_string()));
    }

    #[test]
    fn test_rejection_of_non_letters() {
        assert_eq!(clean("abc123"), None);
        assert_eq!(clean(""), None);
        assert_eq!(clean("---"), None);
        assert_eq!(clean("42"), None);
    }

    #[test]
    fn test_clean_word_is_idempotent() {
        for candidate in ["Hello!", "don't", "word.", "CAT"] {
            let once = clean(candidate).unwrap();
            assert_eq!(clean(&once), Some(once.clone()));
        }
    }

    #[test]
    fn test_apostrophes_stripped_by_default() {
        assert_eq!(clean("don't"), Some("dont".to_string()));
        assert_eq!(clean("'tis"), Some("tis".to_string()));
    }

    #[test]
    fn test_apostrophes_preserved_when_configured() {
        let opts = TokenizerOptions {
            strip_all_apostrophes: false,
        };
        assert_eq!(
            Tokenizer::clean_word("don't", opts),
            Some("don't".to_string())
        );
        // Leading/trailing apostrophes are trimmed, interior ones kept.
        assert_eq!(
            Tokenizer::clean_word("'don't'", opts),
            Some("don't".to_string())
        );
        assert_eq!(Tokenizer::clean_word("''", opts), None);
    }

    #[test]
    fn test_basic_sentence() {
        let t = Tokenizer::new("The cat sat.");
        assert_eq!(t.words(), ["the", "cat", "sat"]);
        assert_eq!(t.total_wordcount(), 3);
        assert_eq!(t.count("the"), 1);
        assert_eq!(t.count("cat"), 1);
        assert_eq!(t.count("sat"), 1);
    }

    #[test]
    fn test_repeated_words_accumulate() {
        let t = Tokenizer::new("Cat cat CAT!");
        assert_eq!(t.words(), ["cat", "cat", "cat"]);
        assert_eq!(t.total_wordcount(), 3);
        assert_eq!(t.count("cat"), 3);
        assert_eq!(t.word_counts().len(), 1);
    }

    #[test]
    fn test_contractions_with_default_stripping() {
        let t = Tokenizer::new("don't stop");
        assert_eq!(t.words(), ["dont", "stop"]);
        assert_eq!(t.count("dont"), 1);
        assert_eq!(t.count("stop"), 1);
    }

    #[test]
    fn test_empty_input() {
        let t = Tokenizer::new("");
        assert!(t.words().is_empty());
        assert!(t.word_counts().is_empty());
        assert_eq!(t.total_wordcount(), 0);
    }

    #[test]
    fn test_double_spaces_yield_no_extra_words() {
        // Splitting on the single space gives an empty candidate between
        // "a" and "b"; it fails validation and is dropped.
        let t = Tokenizer::new("a  b");
        assert_eq!(t.words(), ["a", "b"]);
        assert_eq!(t.total_wordcount(), 2);
    }

    #[test]
    fn test_tabs_and_embedded_newlines_are_not_separators() {
        // "a\tb" is one candidate; the tab survives scrubbing and the
        // candidate is rejected. A newline between words is scrubbed, fusing
        // them into one word.
        let t = Tokenizer::new("a\tb c\nd e");
        assert_eq!(t.words(), ["cd", "e"]);
    }

    #[test]
    fn test_order_preserved_across_rejections() {
        let t = Tokenizer::new("one 123 two --- three");
        assert_eq!(t.words(), ["one", "two", "three"]);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let t = Tokenizer::new("the quick brown fox jumps over the lazy dog the end");
        let sum: usize = t.word_counts().values().sum();
        assert_eq!(sum, t.total_wordcount());
        assert_eq!(t.total_wordcount(), t.words().len());
        assert_eq!(t.count("the"), 3);
    }

    #[test]
    fn test_no_zero_counts() {
        let t = Tokenizer::new("some words, some 42 junk!");
        assert!(t.word_counts().values().all(|&c| c > 0));
        for word in t.word_counts().keys() {
            assert!(t.words().contains(word));
        }
    }

    #[test]
    fn test_deterministic_construction() {
        let input = "Repeatable, input; with--punctuation and CASE.";
        let a = Tokenizer::new(input);
        let b = Tokenizer::new(input);
        assert_eq!(a.words(), b.words());
        assert_eq!(a.word_counts(), b.word_counts());
        assert_eq!(a.total_wordcount(), b.total_wordcount());
    }

    #[test]
    fn test_count_of_absent_word_is_zero() {
        let t = Tokenizer::new("present");
        assert_eq!(t.count("absent"), 0);
    }
}
