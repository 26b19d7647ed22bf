use std::path::PathBuf;

use serde::Serialize;

use crate::text_util;

/// Character budget for the body preview attached to serialized search hits.
pub const PREVIEW_CHARS: usize = 200;

/// One parsed knowledge-base entry.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Stable identifier: the source filename stem.
    pub id: String,
    /// Display title; falls back to the filename stem when the header has none.
    pub title: String,
    /// Named category grouping related entries. Empty when the header has none.
    pub topic: String,
    pub tags: Vec<String>,
    pub created: String,
    pub updated: String,
    /// Raw body text. Serialized outward as `content`.
    #[serde(rename = "content")]
    pub body: String,
    /// Plain-text display form of the body, derived once at parse time.
    #[serde(skip)]
    pub rendered: String,
    /// Up to 20 terms ranked by frequency, derived once at parse time.
    pub keywords: Vec<String>,
    /// Source file name, the value priority rules refer to.
    pub filename: String,
    pub source_path: PathBuf,
}

impl Document {
    /// Body preview capped at [`PREVIEW_CHARS`] characters, with a trailing
    /// `...` when truncated.
    pub fn preview(&self) -> String {
        text_util::preview(&self.body, PREVIEW_CHARS)
    }

    /// Lowercased concatenation of title, topic, tags, and body: the text
    /// scanned by keyword extraction and the semantic cluster bonus.
    pub(crate) fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.topic,
            self.tags.join(" "),
            self.body
        )
        .to_lowercase()
    }
}
