// src/main.rs
use std::collections::HashMap;
use std::env;
use std::fs;
use std::time::Instant;

use rayon::prelude::*;

use wordtally::{Tokenizer, TokenizerOptions};

const TOP_WORDS_TO_SHOW: usize = 20;
const SAMPLE_WORDS_TO_SHOW: usize = 20;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut filenames: Vec<&String> = Vec::new();
    let mut keep_apostrophes = false;
    for arg in &args[1..] {
        if arg == "--keep-apostrophes" {
            keep_apostrophes = true;
        } else {
            filenames.push(arg);
        }
    }

    if filenames.is_empty() {
        eprintln!("--- wordtally: word frequency tokenizer ---");
        eprintln!("Usage: {} <filename>... [--keep-apostrophes]", args[0]);
        eprintln!("Please provide at least one text file to tokenize.");
        std::process::exit(1);
    }

    let options = TokenizerOptions {
        strip_all_apostrophes: !keep_apostrophes,
    };

    println!("--- wordtally: word frequency tokenizer ---");

    let read_start = Instant::now();
    let mut contents: Vec<(&String, String)> = Vec::new();
    for filename in &filenames {
        match fs::read_to_string(filename) {
            Ok(c) => contents.push((filename, c)),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", filename, e);
                std::process::exit(1);
            }
        }
    }
    println!(
        "Read {} file(s). (Took {:?})",
        contents.len(),
        read_start.elapsed()
    );

    // One Tokenizer per file, each confined to its own rayon task; the
    // instances are read-only after construction so merging afterward is the
    // only cross-file step.
    let tokenize_start = Instant::now();
    let tokenizers: Vec<(&String, Tokenizer)> = contents
        .par_iter()
        .map(|(filename, content)| (*filename, Tokenizer::with_options(content.as_str(), options)))
        .collect();
    let tokenize_duration = tokenize_start.elapsed();

    let mut merged_counts: HashMap<&str, usize> = HashMap::new();
    let mut merged_total = 0usize;
    for (filename, tokenizer) in &tokenizers {
        println!(
            "  {}: {} words, {} distinct",
            filename,
            tokenizer.total_wordcount(),
            tokenizer.word_counts().len()
        );
        merged_total += tokenizer.total_wordcount();
        for (word, count) in tokenizer.word_counts() {
            *merged_counts.entry(word.as_str()).or_insert(0) += count;
        }
    }

    println!("\nTime taken to tokenize: {:?}", tokenize_duration);
    println!("Total words: {}", merged_total);
    println!("Distinct words: {}", merged_counts.len());

    let mut ranked: Vec<(&str, usize)> = merged_counts.into_iter().collect();
    // Ties break alphabetically so the report is stable across runs.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("\nTop {} words:", ranked.len().min(TOP_WORDS_TO_SHOW));
    if ranked.is_empty() {
        println!("(No words produced from file content)");
    } else {
        for (word, count) in ranked.iter().take(TOP_WORDS_TO_SHOW) {
            println!("{:6}  {}", count, word);
        }
    }

    if let Some((_, first)) = tokenizers.first() {
        let sample = &first.words()[..first.words().len().min(SAMPLE_WORDS_TO_SHOW)];
        if !sample.is_empty() {
            println!("\nSample of first {} words:", sample.len());
            println!("{}", sample.join(" | "));
        }
    }

    println!("\n--- Tokenization complete ---");
}
