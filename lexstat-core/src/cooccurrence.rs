//! Word co-occurrence within a forward sliding window
//!
//! For every token position `i` and every offset `1..=window`, the token at
//! `i` and the token at `i + offset` co-occur. Two results come out of one
//! scan:
//!
//! - a dense, symmetric `V x V` count matrix over the vocabulary, and
//! - the distinct ordered pairs `(earlier, later)` in order of first
//!   occurrence, excluding pairs of a token with itself.

use crate::error::Result;
use crate::input::Source;
use crate::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};

/// Window used when the caller has no preference
pub const DEFAULT_WINDOW: usize = 2;

/// Distinct ordered co-occurring pairs in first-seen order
pub fn word_cooccurrence_matrix(source: &Source, window: usize) -> Result<Vec<(String, String)>> {
    Ok(cooccurrence_analysis(source, window)?.into_pairs())
}

/// Full co-occurrence analysis, including the dense count matrix
pub fn cooccurrence_analysis(source: &Source, window: usize) -> Result<CooccurrenceMatrix> {
    let text = source.read_text()?;
    let tokens = tokenize(&text);
    Ok(CooccurrenceMatrix::build(&tokens, window))
}

/// Result of a co-occurrence scan
#[derive(Debug, Clone)]
pub struct CooccurrenceMatrix {
    /// Distinct tokens; position is the token's matrix index
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    /// Row-major `vocabulary.len()` squared cells
    counts: Vec<u32>,
    pairs: Vec<(String, String)>,
    window: usize,
    total_tokens: usize,
}

impl CooccurrenceMatrix {
    /// Scan a token sequence
    pub fn build(tokens: &[String], window: usize) -> Self {
        let mut vocabulary: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let ids: Vec<usize> = tokens
            .iter()
            .map(|token| {
                *index.entry(token.clone()).or_insert_with(|| {
                    vocabulary.push(token.clone());
                    vocabulary.len() - 1
                })
            })
            .collect();

        let size = vocabulary.len();
        let mut counts = vec![0u32; size * size];
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut pair_ids: Vec<(usize, usize)> = Vec::new();

        for (i, &a) in ids.iter().enumerate() {
            for &b in ids.iter().skip(i + 1).take(window) {
                counts[a * size + b] += 1;
                counts[b * size + a] += 1;

                if a != b && seen.insert((a, b)) {
                    pair_ids.push((a, b));
                }
            }
        }

        let pairs = pair_ids
            .into_iter()
            .map(|(a, b)| (vocabulary[a].clone(), vocabulary[b].clone()))
            .collect::<Vec<_>>();

        log::debug!(
            "co-occurrence over {} tokens, vocabulary {}, window {}: {} distinct pairs",
            tokens.len(),
            size,
            window,
            pairs.len()
        );

        Self {
            vocabulary,
            index,
            counts,
            pairs,
            window,
            total_tokens: tokens.len(),
        }
    }

    /// Distinct tokens, indexed by order of first appearance
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Matrix index of a token, if it occurs in the text
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Symmetric co-occurrence count for two tokens
    ///
    /// Unknown tokens count as zero. `count(a, a)` counts repeats of `a`
    /// within the window, twice per repeat.
    pub fn count(&self, a: &str, b: &str) -> u32 {
        match (self.index_of(a), self.index_of(b)) {
            (Some(i), Some(j)) => self.counts[i * self.vocabulary.len() + j],
            _ => 0,
        }
    }

    /// One row of the matrix, in vocabulary order
    pub fn row(&self, token: &str) -> Option<&[u32]> {
        let size = self.vocabulary.len();
        self.index_of(token)
            .map(|i| &self.counts[i * size..(i + 1) * size])
    }

    /// Distinct ordered pairs in first-seen order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Consume the analysis, keeping only the pairs
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Window the scan used
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of tokens scanned
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }
}
