//! Relevance scoring: a weighted field-overlap score plus a curated
//! semantic-cluster bonus. Pure functions of (query, document); the weights
//! are load-bearing and must not drift, downstream ranking expectations are
//! tuned against them.

use std::collections::HashSet;

use crate::{
    curated::{Cluster, CuratedTables},
    document::Document,
    keywords,
};

pub const TITLE_WEIGHT: f64 = 10.0;
pub const TOPIC_WEIGHT: f64 = 8.0;
pub const TAG_WEIGHT: f64 = 6.0;
pub const BODY_WEIGHT: f64 = 2.0;
pub const KEYWORD_WEIGHT: f64 = 4.0;
pub const EXACT_PHRASE_BONUS: f64 = 15.0;
pub const BIGRAM_BONUS: f64 = 8.0;
pub const CLUSTER_TERM_WEIGHT: f64 = 2.0;

/// Pre-tokenized query state, computed once per search and shared across
/// per-document scoring.
#[derive(Debug)]
pub struct QueryTerms {
    /// Trimmed, lowercased query string.
    pub phrase: String,
    token_set: HashSet<String>,
    bigrams: Vec<String>,
}

impl QueryTerms {
    pub fn new(query: &str) -> Self {
        let phrase = query.trim().to_lowercase();
        let tokens = keywords::tokenize(&phrase);
        let bigrams = tokens.windows(2).map(|w| w.join(" ")).collect();
        let token_set = tokens.into_iter().collect();
        Self {
            phrase,
            token_set,
            bigrams,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }
}

/// Weighted field-overlap score for one (query, document) pair.
pub fn relevance(terms: &QueryTerms, doc: &Document) -> f64 {
    let mut score = 0.0;

    score += overlap(&terms.token_set, &doc.title) as f64 * TITLE_WEIGHT;
    score += overlap(&terms.token_set, &doc.topic) as f64 * TOPIC_WEIGHT;

    let tag_matches: usize = doc
        .tags
        .iter()
        .map(|tag| overlap(&terms.token_set, tag))
        .sum();
    score += tag_matches as f64 * TAG_WEIGHT;

    score += overlap(&terms.token_set, &doc.body) as f64 * BODY_WEIGHT;

    // A derived keyword counts when any query token appears inside it.
    let keyword_matches = doc
        .keywords
        .iter()
        .filter(|kw| terms.token_set.iter().any(|w| kw.contains(w.as_str())))
        .count();
    score += keyword_matches as f64 * KEYWORD_WEIGHT;

    let body_lower = doc.body.to_lowercase();
    if !terms.phrase.is_empty() && body_lower.contains(&terms.phrase) {
        score += EXACT_PHRASE_BONUS;
    }
    for bigram in &terms.bigrams {
        if body_lower.contains(bigram.as_str()) {
            score += BIGRAM_BONUS;
        }
    }

    score
}

/// Clusters with at least one representative term exactly matching a query
/// token. Multi-word terms never activate a cluster.
pub fn active_clusters<'a>(
    terms: &QueryTerms,
    tables: &'a CuratedTables,
) -> Vec<&'a Cluster> {
    tables
        .clusters()
        .iter()
        .filter(|cluster| {
            cluster
                .terms
                .iter()
                .any(|term| terms.token_set.contains(term.as_str()))
        })
        .collect()
}

/// Bonus from active clusters: the number of their terms contained anywhere
/// in the document text, weighted by [`CLUSTER_TERM_WEIGHT`].
pub fn cluster_bonus(active: &[&Cluster], doc: &Document) -> f64 {
    if active.is_empty() {
        return 0.0;
    }
    let haystack = doc.haystack();
    let matches: usize = active
        .iter()
        .map(|cluster| {
            cluster
                .terms
                .iter()
                .filter(|term| haystack.contains(term.as_str()))
                .count()
        })
        .sum();
    matches as f64 * CLUSTER_TERM_WEIGHT
}

/// Full semantic score: weighted relevance plus the cluster bonus.
pub fn semantic(terms: &QueryTerms, active: &[&Cluster], doc: &Document) -> f64 {
    relevance(terms, doc) + cluster_bonus(active, doc)
}

/// Count of query tokens appearing among the field's tokens.
fn overlap(query_tokens: &HashSet<String>, field: &str) -> usize {
    let field_tokens = keywords::token_set(field);
    query_tokens
        .iter()
        .filter(|token| field_tokens.contains(token.as_str()))
        .count()
}
