// src/pattern.rs

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;

// ----- SCRUB TABLES -----

/// Punctuation literals to scrub out of candidate tokens. The apostrophe is
/// listed last; the keep-apostrophe scrub matcher is built without it so that
/// contractions survive in that mode.
pub static PUNCTUATION: &[&str] = &[
    "(", ")", ":", ";", ",", "-", "!", ".", "?", "/", "\"", "*", "'",
];

/// Carriage return strings, on *nix and windows. Longest first so the
/// leftmost-first matcher consumes "\r\n" whole instead of leaving "\r" behind.
pub static CARRIAGE_RETURNS: &[&str] = &["\r\n", "\n"];

/// Final sanity-check pattern run on words before they get pushed onto the
/// core words list: non-empty, lowercase letters and apostrophes only.
pub const WORD_PATTERN: &str = "^[a-z']+$";

// ----- COMPILED MATCHERS -----
// Compiled once per process and shared by every Tokenizer instance; there is
// no per-instance or mutable pattern state.

fn build_scrub_matcher(literals: &[&str]) -> AhoCorasick {
    AhoCorasickBuilder::new()
        // LeftmostFirst with longer sequences listed earlier gives the longest
        // match at any given start position, so deletion behaves like literal
        // substring removal.
        .match_kind(MatchKind::LeftmostFirst)
        .build(
            CARRIAGE_RETURNS
                .iter()
                .chain(literals.iter())
                .copied()
                .collect::<Vec<&str>>(),
        )
        .unwrap_or_else(|e| panic!("scrub matcher build error: {}", e))
}

/// Scrub matcher for the literal source behavior: every punctuation literal
/// including the apostrophe, plus carriage returns.
pub static SCRUB_ALL: Lazy<AhoCorasick> = Lazy::new(|| build_scrub_matcher(PUNCTUATION));

/// Scrub matcher for contraction-preserving mode: the same table minus the
/// trailing apostrophe entry.
pub static SCRUB_KEEP_APOSTROPHE: Lazy<AhoCorasick> =
    Lazy::new(|| build_scrub_matcher(&PUNCTUATION[..PUNCTUATION.len() - 1]));

/// Compiled word-shape validator.
pub static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(WORD_PATTERN)
        .unwrap_or_else(|e| panic!("word pattern compile error for '{}': {}", WORD_PATTERN, e))
});

/// Deletes every occurrence of the matcher's literals from `input`.
pub fn scrub(matcher: &AhoCorasick, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    matcher.replace_all_with(input, &mut out, |_, _, _| true);
    out
}
