//! Query-relevance scoring of sentences.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Relevance of one sentence, keyed by its position in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    pub index: usize,
    pub score: f64,
}

/// Lower-cased word tokens of `text`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct query tokens.
pub fn query_tokens(query: &str) -> HashSet<String> {
    tokenize(query).into_iter().collect()
}

/// Score each sentence by query-token overlap, normalized by sentence length.
///
/// `overlap` sums the in-sentence frequency of every distinct query token
/// present; the score is `overlap / sqrt(token_count)`. Sentences without
/// tokens score exactly zero. Output order and length match the input.
pub fn score_sentences(sentences: &[String], query: &HashSet<String>) -> Vec<SentenceScore> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let tokens = tokenize(sentence);
            if tokens.is_empty() {
                return SentenceScore { index, score: 0.0 };
            }

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in &tokens {
                *counts.entry(token.as_str()).or_default() += 1;
            }
            let overlap: usize = query
                .iter()
                .filter_map(|t| counts.get(t.as_str()))
                .sum();

            SentenceScore {
                index,
                score: overlap as f64 / (tokens.len() as f64).sqrt(),
            }
        })
        .collect()
}
