//! The engine object: owns the corpus directory, curated tables, and the
//! TTL cache, and exposes the public query operations.
//!
//! Query calls never propagate errors: a failed corpus load is logged and
//! observed as an empty result, and unknown ids come back as `None`/empty.
//! Only the explicit [`KnowledgeBase::refresh`] surfaces failures.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use crate::{
    cache::{Corpus, DEFAULT_TTL, SnapshotCache},
    curated::CuratedTables,
    document::Document,
    error::Result,
    ingestion,
    search::{self, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE, SearchHit},
};

/// Default number of similar documents returned by [`KnowledgeBase::similar_to`].
pub const DEFAULT_SIMILAR_RESULTS: usize = 5;

const KEYWORD_OVERLAP_WEIGHT: f64 = 0.7;
const TOPIC_MATCH_WEIGHT: f64 = 0.3;

/// A lazily loaded, TTL-cached knowledge base over a directory of tagged
/// text documents.
pub struct KnowledgeBase {
    root: PathBuf,
    tables: CuratedTables,
    cache: SnapshotCache,
}

impl KnowledgeBase {
    /// Engine over `root` with the built-in curated tables and the default
    /// five-minute cache TTL.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_tables(root, CuratedTables::builtin())
    }

    /// Engine with custom curated tables.
    pub fn with_tables(root: impl Into<PathBuf>, tables: CuratedTables) -> Self {
        Self {
            root: root.into(),
            tables,
            cache: SnapshotCache::new(DEFAULT_TTL),
        }
    }

    /// Override the cache TTL (mainly for hosts with different staleness
    /// tolerances; tests use a zero TTL to force reloads).
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache = SnapshotCache::new(ttl);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Force a full reload from disk, bypassing the TTL. Returns the number
    /// of documents loaded.
    pub fn refresh(&self) -> Result<usize> {
        let corpus = ingestion::load_corpus(&self.root)?;
        let count = corpus.len();
        self.cache.install(corpus);
        tracing::info!(documents = count, root = %self.root.display(), "knowledge base refreshed");
        Ok(count)
    }

    /// The current corpus snapshot, reloading from disk when the cache is
    /// empty or stale.
    fn corpus(&self) -> Result<Arc<Corpus>> {
        if let Some(corpus) = self.cache.fresh() {
            return Ok(corpus);
        }
        let corpus = ingestion::load_corpus(&self.root)?;
        Ok(self.cache.install(corpus))
    }

    /// Snapshot for query paths: load failures are logged and degrade to an
    /// empty corpus.
    fn corpus_or_empty(&self) -> Arc<Corpus> {
        match self.corpus() {
            Ok(corpus) => corpus,
            Err(error) => {
                tracing::warn!(root = %self.root.display(), %error, "corpus load failed");
                Arc::new(Corpus::default())
            }
        }
    }

    /// Ranked search over the corpus. See [`search::execute_search`] for the
    /// pipeline; blank queries and load failures both yield an empty list.
    pub fn search(&self, query: &str, max_results: usize, min_score: f64) -> Vec<SearchHit> {
        let corpus = self.corpus_or_empty();
        search::execute_search(&corpus, &self.tables, query, max_results, min_score)
    }

    /// [`Self::search`] with the default result cap and score threshold.
    pub fn search_default(&self, query: &str) -> Vec<SearchHit> {
        self.search(query, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE)
    }

    /// Look up one document by id.
    pub fn get(&self, id: &str) -> Option<Document> {
        self.corpus_or_empty().get(id).cloned()
    }

    /// Look up a document by title: exact case-insensitive match first, then
    /// the best search hit for the title text.
    pub fn find_by_title(&self, title: &str) -> Option<Document> {
        let wanted = title.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        let corpus = self.corpus_or_empty();
        if let Some(doc) = corpus
            .documents()
            .iter()
            .find(|doc| doc.title.trim().to_lowercase() == wanted)
        {
            return Some(doc.clone());
        }

        search::execute_search(&corpus, &self.tables, title, 1, DEFAULT_MIN_SCORE)
            .into_iter()
            .next()
            .map(|hit| hit.document)
    }

    /// Distinct non-empty topics, sorted lexicographically.
    pub fn topics(&self) -> Vec<String> {
        let corpus = self.corpus_or_empty();
        let topics: BTreeSet<String> = corpus
            .documents()
            .iter()
            .filter(|doc| !doc.topic.is_empty())
            .map(|doc| doc.topic.clone())
            .collect();
        topics.into_iter().collect()
    }

    /// Distinct tags across all documents, sorted lexicographically.
    pub fn tags(&self) -> Vec<String> {
        let corpus = self.corpus_or_empty();
        let tags: BTreeSet<String> = corpus
            .documents()
            .iter()
            .flat_map(|doc| doc.tags.iter().cloned())
            .collect();
        tags.into_iter().collect()
    }

    /// Documents whose topic equals `topic`, case-insensitively, in corpus
    /// order.
    pub fn find_by_topic(&self, topic: &str, max_results: usize) -> Vec<Document> {
        let wanted = topic.to_lowercase();
        self.corpus_or_empty()
            .documents()
            .iter()
            .filter(|doc| doc.topic.to_lowercase() == wanted)
            .take(max_results)
            .cloned()
            .collect()
    }

    /// Documents carrying `tag`, case-insensitively, in corpus order.
    pub fn find_by_tag(&self, tag: &str, max_results: usize) -> Vec<Document> {
        let wanted = tag.to_lowercase();
        self.corpus_or_empty()
            .documents()
            .iter()
            .filter(|doc| doc.tags.iter().any(|t| t.to_lowercase() == wanted))
            .take(max_results)
            .cloned()
            .collect()
    }

    /// Documents most similar to `id` by keyword overlap and shared topic.
    /// Unknown ids yield an empty list.
    pub fn similar_to(&self, id: &str, max_results: usize) -> Vec<Document> {
        let corpus = self.corpus_or_empty();
        let Some(target) = corpus.get(id) else {
            return Vec::new();
        };

        let mut scored: Vec<(f64, &Document)> = corpus
            .documents()
            .iter()
            .filter(|doc| doc.id != target.id)
            .filter_map(|doc| {
                let score = similarity(target, doc);
                (score > 0.0).then_some((score, doc))
            })
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(max_results)
            .map(|(_, doc)| doc.clone())
            .collect()
    }

    /// Number of documents in the current corpus.
    pub fn document_count(&self) -> usize {
        self.corpus_or_empty().len()
    }
}

/// Similarity between two documents: keyword-set overlap weighted 0.7 plus
/// 0.3 for an identical topic. Two empty topics count as identical, so
/// headerless documents still relate to each other. Symmetric in its
/// arguments.
fn similarity(a: &Document, b: &Document) -> f64 {
    let overlap = a
        .keywords
        .iter()
        .filter(|kw| b.keywords.contains(kw))
        .count();
    let topic_match = if a.topic == b.topic { 1.0 } else { 0.0 };
    overlap as f64 * KEYWORD_OVERLAP_WEIGHT + topic_match * TOPIC_MATCH_WEIGHT
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::keywords;

    fn doc(id: &str, title: &str, topic: &str, tags: &[&str], body: &str) -> Document {
        let mut doc = Document {
            id: id.into(),
            title: title.into(),
            topic: topic.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created: String::new(),
            updated: String::new(),
            body: body.into(),
            rendered: body.into(),
            keywords: Vec::new(),
            filename: format!("{id}.mdx"),
            source_path: PathBuf::from(format!("/kb/{id}.mdx")),
        };
        doc.keywords = keywords::extract_keywords(&doc.haystack());
        doc
    }

    fn write_corpus(dir: &Path) {
        std::fs::write(
            dir.join("01-grinder.mdx"),
            "---\ntitle: Grinder Care\ntopic: Equipment\ntags: [grinder, burr]\n---\nClean the burr set weekly to keep grind quality consistent.\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("02-milk.mdx"),
            "---\ntitle: Milk Steaming\ntopic: Training\ntags: [milk, latte]\n---\nSteam milk to a silky microfoam for latte art.\n",
        )
        .unwrap();
        std::fs::write(
            dir.join("03-storage.mdx"),
            "---\ntitle: Bean Storage\ntopic: Equipment\ntags: [beans, storage]\n---\nStore beans airtight; grind quality suffers once beans go stale.\n",
        )
        .unwrap();
    }

    fn engine(dir: &Path) -> KnowledgeBase {
        KnowledgeBase::with_tables(dir, CuratedTables::empty())
    }

    #[test]
    fn get_returns_document_by_id() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        assert_eq!(kb.get("02-milk").map(|d| d.title), Some("Milk Steaming".into()));
        assert!(kb.get("missing").is_none());
    }

    #[test]
    fn topics_are_distinct_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        assert_eq!(kb.topics(), vec!["Equipment", "Training"]);
    }

    #[test]
    fn tags_are_distinct_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        assert_eq!(kb.tags(), vec!["beans", "burr", "grinder", "latte", "milk", "storage"]);
    }

    #[test]
    fn find_by_topic_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        let docs = kb.find_by_topic("equipment", 10);
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["01-grinder", "03-storage"]);
        assert_eq!(kb.find_by_topic("equipment", 1).len(), 1);
    }

    #[test]
    fn find_by_tag_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        let docs = kb.find_by_tag("LATTE", 10);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "02-milk");
    }

    #[test]
    fn find_by_title_prefers_exact_match() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        let doc = kb.find_by_title("  bean storage ").unwrap();
        assert_eq!(doc.id, "03-storage");
    }

    #[test]
    fn find_by_title_falls_back_to_search() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        // No document is titled exactly this; search finds the closest.
        let doc = kb.find_by_title("milk steaming basics").unwrap();
        assert_eq!(doc.id, "02-milk");
        assert!(kb.find_by_title("").is_none());
    }

    #[test]
    fn similar_to_ranks_by_shared_keywords_and_topic() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        // Grinder and storage share "grind"/"quality"/"beans" vocabulary and
        // the Equipment topic; milk shares nothing.
        let similar = kb.similar_to("01-grinder", 5);
        assert_eq!(similar[0].id, "03-storage");
        assert!(similar.iter().all(|d| d.id != "01-grinder"));
    }

    #[test]
    fn similar_to_unknown_id_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        assert!(kb.similar_to("nope", 5).is_empty());
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = doc("a", "Grinder Care", "Equipment", &["grinder"], "burr grind quality");
        let b = doc("b", "Bean Storage", "Equipment", &["beans"], "grind quality beans");
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
        assert!(similarity(&a, &b) > 0.0);
    }

    #[test]
    fn shared_empty_topics_count_as_matching() {
        let a = doc("a", "One", "", &[], "alpha");
        let b = doc("b", "Two", "", &[], "bravo");
        // No shared keywords, but both topics are empty.
        assert_eq!(similarity(&a, &b), TOPIC_MATCH_WEIGHT);

        let c = doc("c", "Three", "Equipment", &[], "charlie");
        assert_eq!(similarity(&a, &c), 0.0);
    }

    #[test]
    fn refresh_reports_document_count() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());

        assert_eq!(kb.refresh().unwrap(), 3);
        assert_eq!(kb.document_count(), 3);
    }

    #[test]
    fn refresh_picks_up_changed_documents() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());
        assert_eq!(kb.document_count(), 3);

        std::fs::write(
            tmp.path().join("04-water.mdx"),
            "---\ntitle: Water Quality\ntopic: Quality\n---\nFiltered water protects the boiler.\n",
        )
        .unwrap();
        // Within the TTL the cache still serves the old snapshot.
        assert_eq!(kb.document_count(), 3);
        assert_eq!(kb.refresh().unwrap(), 4);
        assert_eq!(kb.document_count(), 4);
    }

    #[test]
    fn missing_directory_degrades_to_empty_results() {
        let kb = engine(Path::new("/definitely/not/a/real/dir"));
        assert!(kb.search_default("espresso").is_empty());
        assert!(kb.get("anything").is_none());
        assert!(kb.topics().is_empty());
        assert_eq!(kb.document_count(), 0);
        assert!(kb.refresh().is_err());
    }

    #[test]
    fn ids_are_unique_after_refresh() {
        let tmp = tempfile::tempdir().unwrap();
        write_corpus(tmp.path());
        let kb = engine(tmp.path());
        kb.refresh().unwrap();

        let corpus = kb.corpus().unwrap();
        let mut ids: Vec<&str> = corpus.documents().iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), corpus.len());
    }
}
