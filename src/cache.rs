//! In-memory corpus snapshot with TTL-based reuse.
//!
//! The whole corpus is swapped wholesale: readers clone an [`Arc`] to the
//! current snapshot and never observe a partially loaded state.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::{Duration, Instant},
};

use crate::document::Document;

/// How long a loaded corpus is reused before the next query reloads it.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// An immutable set of parsed documents, indexed by id.
///
/// Iteration order is the ingestion order (sorted relative paths), which is
/// what listing and fallback ranking rely on.
#[derive(Debug, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        let mut corpus = Self::default();
        for doc in documents {
            corpus.insert(doc);
        }
        corpus
    }

    /// Duplicate ids keep the first document's position but take the latest
    /// content.
    fn insert(&mut self, doc: Document) {
        match self.by_id.get(&doc.id) {
            Some(&idx) => self.documents[idx] = doc,
            None => {
                self.by_id.insert(doc.id.clone(), self.documents.len());
                self.documents.push(doc);
            }
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.by_id.get(id).map(|&idx| &self.documents[idx])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

struct State {
    corpus: Arc<Corpus>,
    refreshed_at: Instant,
}

/// Holds the most recent corpus snapshot and hands it out until the TTL
/// expires. An empty snapshot is never considered fresh, so transient load
/// failures retry on the next query instead of being pinned for the TTL.
pub struct SnapshotCache {
    ttl: Duration,
    state: RwLock<Option<State>>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: RwLock::new(None),
        }
    }

    /// The current snapshot, if one exists, is non-empty, and is younger
    /// than the TTL.
    pub fn fresh(&self) -> Option<Arc<Corpus>> {
        let guard = self.state.read().unwrap();
        let state = guard.as_ref()?;
        if state.corpus.is_empty() || state.refreshed_at.elapsed() >= self.ttl {
            return None;
        }
        Some(Arc::clone(&state.corpus))
    }

    /// Replaces the snapshot and restarts the TTL clock.
    pub fn install(&self, corpus: Corpus) -> Arc<Corpus> {
        let corpus = Arc::new(corpus);
        let mut guard = self.state.write().unwrap();
        *guard = Some(State {
            corpus: Arc::clone(&corpus),
            refreshed_at: Instant::now(),
        });
        corpus
    }
}
