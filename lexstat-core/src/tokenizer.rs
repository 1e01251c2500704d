//! Word tokenization
//!
//! A token is a maximal run of Unicode word characters, lowercased.

use regex::Regex;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"))
}

/// Split text into lowercase word tokens, in source order
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of tokens `tokenize` would return
pub fn count_tokens(text: &str) -> usize {
    word_pattern().find_iter(&text.to_lowercase()).count()
}
