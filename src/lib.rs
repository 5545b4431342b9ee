// src/lib.rs

//! wordtally splits raw text into an ordered list of normalized words and
//! builds a frequency count per distinct word, as a preprocessing stage for
//! downstream text analysis.
//!
//! The whole pipeline is the [`Tokenizer`]: candidates come from splitting the
//! input on single spaces, punctuation and carriage returns are scrubbed with
//! a literal multi-pattern matcher, everything is lowercased, and a final
//! word-shape check keeps only strings over lowercase letters and apostrophes.

pub mod pattern;
pub mod tokenizer;

pub use tokenizer::{Tokenizer, TokenizerOptions};
