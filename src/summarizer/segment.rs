//! Sentence segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence terminator followed by a run of whitespace.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split text into trimmed, non-empty sentences.
///
/// A boundary is any whitespace run that immediately follows `.`, `!` or
/// `?`. The terminator stays with the sentence it ends.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminators are single-byte ASCII, so +1 keeps us on a char boundary.
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
