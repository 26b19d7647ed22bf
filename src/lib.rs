//! grounds - a curated knowledge-base relevance engine.
//!
//! grounds loads a directory of tagged text documents (optional `---`
//! header block with `title`, `topic`, `tags`, `created`, `updated`), caches
//! the parsed corpus for a bounded time window, and ranks documents against
//! free-text queries by combining weighted field overlap, curated
//! keyword-to-document priority rules, and a semantic term-cluster bonus.
//!
//! # Quick start
//!
//! ```no_run
//! use grounds::KnowledgeBase;
//!
//! let kb = KnowledgeBase::open("knowledge");
//! for hit in kb.search("espresso machine maintenance", 10, 1.0) {
//!     println!("{:>3}. [{:.1}] {}", hit.rank, hit.score, hit.document.title);
//! }
//!
//! if let Some(doc) = kb.get("16-espresso-machine-heartbeat") {
//!     println!("{}", doc.body);
//! }
//! ```

pub mod cache;
pub mod cli;
pub mod curated;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod ingestion;
pub mod kb;
pub mod keywords;
pub mod score;
pub mod search;
pub mod text_util;
pub mod walker;

pub use curated::CuratedTables;
pub use document::Document;
pub use error::{Error, Result};
pub use kb::KnowledgeBase;
pub use search::SearchHit;
