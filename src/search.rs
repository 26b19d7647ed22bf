use serde::Serialize;

use crate::{
    cache::Corpus,
    curated::CuratedTables,
    document::Document,
    score::{self, QueryTerms},
    text_util,
};

/// Default result-list cap for a search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default minimum semantic score for a document to surface.
pub const DEFAULT_MIN_SCORE: f64 = 1.0;

/// One ranked search result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub score: f64,
    #[serde(flatten)]
    pub document: Document,
    /// Capped body preview for serialized output.
    pub preview: String,
}

impl SearchHit {
    fn new(score: f64, document: &Document) -> Self {
        Self {
            rank: 0,
            score,
            preview: document.preview(),
            document: document.clone(),
        }
    }
}

/// Execute the full ranking pipeline over a loaded corpus.
///
/// 1. Priority resolution: curated rules whose pattern occurs in the query
///    pin their documents to the head of the result list.
/// 2. Remaining slots fill from the weighted semantic score, restricted to
///    documents outside the priority head and filtered by `min_score`.
/// 3. With no matching rule, the semantic score ranks the whole corpus.
///
/// Blank queries yield no results. Output order is deterministic for a fixed
/// corpus: score ties keep corpus enumeration order.
pub fn execute_search(
    corpus: &Corpus,
    tables: &CuratedTables,
    query: &str,
    max_results: usize,
    min_score: f64,
) -> Vec<SearchHit> {
    let terms = QueryTerms::new(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let priority_files = resolve_priority_files(&terms.phrase, tables);

    let mut hits = if priority_files.is_empty() {
        semantic_hits(corpus, tables, &terms, min_score, None)
    } else {
        let mut head: Vec<SearchHit> = corpus
            .documents()
            .iter()
            .filter(|doc| priority_files.contains(&doc.filename.as_str()))
            .map(|doc| {
                let score = match priority_files.iter().position(|f| *f == doc.filename) {
                    Some(idx) => 100.0 - idx as f64,
                    None => 50.0,
                };
                SearchHit::new(score, doc)
            })
            .collect();
        head.sort_by(|a, b| b.score.total_cmp(&a.score));
        head.truncate(max_results);

        let remaining = max_results.saturating_sub(head.len());
        if remaining > 0 {
            let tail = semantic_hits(corpus, tables, &terms, min_score, Some(&priority_files));
            head.extend(tail.into_iter().take(remaining));
        }
        head
    };

    hits.truncate(max_results);
    for (i, hit) in hits.iter_mut().enumerate() {
        hit.rank = i + 1;
    }
    hits
}

/// Filenames pinned by curated rules matching the query, in rule order with
/// duplicates dropped.
fn resolve_priority_files<'a>(query_lower: &str, tables: &'a CuratedTables) -> Vec<&'a str> {
    let mut files: Vec<&str> = Vec::new();
    for rule in tables.priority_rules() {
        if !query_lower.contains(rule.pattern.as_str()) {
            continue;
        }
        for file in &rule.files {
            if !files.contains(&file.as_str()) {
                files.push(file);
            }
        }
    }
    files
}

/// Score every document (optionally excluding the priority head) and return
/// hits at or above `min_score`, best first.
fn semantic_hits(
    corpus: &Corpus,
    tables: &CuratedTables,
    terms: &QueryTerms,
    min_score: f64,
    exclude: Option<&[&str]>,
) -> Vec<SearchHit> {
    let active = score::active_clusters(terms, tables);

    let mut hits: Vec<SearchHit> = corpus
        .documents()
        .iter()
        .filter(|doc| exclude.is_none_or(|files| !files.contains(&doc.filename.as_str())))
        .filter_map(|doc| {
            let score = score::semantic(terms, &active, doc);
            (score >= min_score).then(|| SearchHit::new(score, doc))
        })
        .collect();

    // Stable sort keeps corpus order for equal scores.
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

/// Format results for human-readable terminal output.
pub fn format_human(hits: &[SearchHit], query: &str) {
    if hits.is_empty() {
        println!("No results found.");
        return;
    }

    for hit in hits {
        println!(
            "{:>3}. [{:>6.1}] {} ({})",
            hit.rank, hit.score, hit.document.title, hit.document.id
        );
        if !hit.document.topic.is_empty() {
            println!("     topic: {}", hit.document.topic);
        }
        if let Some((snippet, line)) = text_util::extract_snippet(&hit.document.rendered, query) {
            for text in snippet.lines() {
                println!("     {line:>3} | {text}");
            }
        }
    }
    println!("\n{} result(s)", hits.len());
}

/// Format results as a JSON object on stdout.
pub fn format_json(hits: &[SearchHit], query: &str) {
    let payload = serde_json::json!({
        "query": query,
        "result_count": hits.len(),
        "results": hits,
    });
    println!("{payload}");
}

/// Format results as plain source paths, one per line.
pub fn format_files(hits: &[SearchHit]) {
    for hit in hits {
        println!("{}", hit.document.source_path.display());
    }
}
