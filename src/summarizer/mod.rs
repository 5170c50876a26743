//! Extractive, query-driven article summarization.
//!
//! The summarizer splits article text into sentences ([`segment`]), scores
//! each against the search query ([`score`]), and keeps the best few as a
//! Markdown bullet list. It also maps the raw sentence scores to a 0–100
//! relevance number for the whole article.
//!
//! # Selection
//!
//! - Sentences are ranked by score with a stable sort, so ties keep document order.
//! - The top `max_sentences` are rendered in document order, not rank order.
//! - If no sentence scores above zero, the first `max_sentences` are used instead.
//!
//! # Overall score
//!
//! | Situation | Score |
//! |-----------|-------|
//! | No sentences | 0 |
//! | Best sentence scores ≤ 0 | 40 |
//! | Otherwise | `50 + 50 × avg/max`, floored |

pub mod score;
pub mod segment;

use crate::models::SummaryResult;
use score::{SentenceScore, query_tokens, score_sentences};
use segment::split_sentences;

/// Sentences kept when the caller does not ask for a specific count.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Characters of the first sentence used as a fallback title.
const TITLE_CHARS: usize = 120;

/// Score reported when nothing in the article relates to the query.
const BASELINE_SCORE: u8 = 40;

/// Summarize `text` against `query`.
///
/// `title` is used verbatim when present and non-empty. Never fails: empty
/// or sentence-less text produces an empty summary with a score of zero.
pub fn summarize(
    text: &str,
    query: &str,
    title: Option<&str>,
    max_sentences: usize,
) -> SummaryResult {
    let title = title.filter(|t| !t.is_empty());
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return SummaryResult {
            title: title
                .map(str::to_string)
                .unwrap_or_else(|| fallback_title(query)),
            summary: String::new(),
            score: 0,
        };
    }

    let scores = score_sentences(&sentences, &query_tokens(query));

    let mut ranked = scores.clone();
    // sort_by is stable: equal scores keep document order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let selected: Vec<usize> = if ranked.iter().all(|s| s.score <= 0.0) {
        (0..max_sentences.min(sentences.len())).collect()
    } else {
        let mut top: Vec<usize> = ranked.iter().take(max_sentences).map(|s| s.index).collect();
        top.sort_unstable();
        top
    };

    let summary = selected
        .iter()
        .map(|&i| format!("- {}", sentences[i]))
        .collect::<Vec<_>>()
        .join("\n");

    let title = match title {
        Some(t) => t.to_string(),
        None => {
            let head: String = sentences[0].chars().take(TITLE_CHARS).collect();
            if head.is_empty() { fallback_title(query) } else { head }
        }
    };

    SummaryResult {
        title,
        summary,
        score: overall_score(&scores),
    }
}

/// Map raw sentence scores to a 0–100 relevance score.
///
/// The ratio of the average to the best score approximates how uniformly
/// relevant the article is.
pub fn overall_score(scores: &[SentenceScore]) -> u8 {
    if scores.is_empty() {
        return 0;
    }

    let max = scores.iter().map(|s| s.score).fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return BASELINE_SCORE;
    }

    let avg = scores.iter().map(|s| s.score).sum::<f64>() / scores.len() as f64;
    let normalized = (avg / max).clamp(0.0, 1.0);
    (50.0 + 50.0 * normalized).floor() as u8
}

fn fallback_title(query: &str) -> String {
    if query.is_empty() {
        "Untitled".to_string()
    } else {
        query.to_string()
    }
}
