use std::collections::{HashMap, HashSet};

/// Common English function words and pronouns excluded from keyword
/// extraction. Query tokens are never filtered against this list.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "is", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "may", "might", "must", "can", "this", "that", "these", "those", "i",
    "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their",
];

/// Maximum number of derived keywords retained per document.
pub const MAX_KEYWORDS: usize = 20;

/// Split text into lowercase word tokens (runs of alphanumeric characters).
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The distinct lowercase tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Extract up to [`MAX_KEYWORDS`] terms from `text`, ranked by frequency.
///
/// Tokens of length ≤ 2 and stop words are dropped. Results are ordered by
/// descending frequency; ties keep first-encountered order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in tokenize(text) {
        if token.chars().count() <= 2 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort: equal counts keep first-encountered order.
    order.sort_by_key(|w| std::cmp::Reverse(counts.get(w).copied().unwrap_or(0)));
    order.truncate(MAX_KEYWORDS);
    order
}
