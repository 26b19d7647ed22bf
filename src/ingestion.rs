//! Turns discovered corpus files into [`Document`]s.
//!
//! Parsing is parallelized with rayon; files that cannot be read are skipped
//! with a warning so one bad file never takes down a corpus load.

use std::path::Path;

use rayon::prelude::*;

use crate::{
    cache::Corpus,
    document::Document,
    error::Result,
    frontmatter, keywords, text_util,
    walker::{self, DiscoveredFile},
};

/// Reads one discovered file and parses it into a document.
pub fn parse_document(file: &DiscoveredFile) -> Result<Document> {
    let content = std::fs::read_to_string(&file.absolute_path)?;
    Ok(document_from_content(file, &content))
}

fn document_from_content(file: &DiscoveredFile, content: &str) -> Document {
    let (header, body) = frontmatter::parse(content);

    let stem = file
        .relative_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();
    let filename = file
        .relative_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| stem.clone());
    let title = header.title.unwrap_or_else(|| stem.clone());

    let mut doc = Document {
        id: stem,
        title,
        topic: header.topic.unwrap_or_default(),
        tags: header.tags,
        created: header.created.unwrap_or_default(),
        updated: header.updated.unwrap_or_default(),
        body: body.to_string(),
        rendered: text_util::render_plain(body),
        keywords: Vec::new(),
        filename,
        source_path: file.absolute_path.clone(),
    };
    doc.keywords = keywords::extract_keywords(&doc.haystack());
    doc
}

/// Walks `root` and parses every supported file into a corpus snapshot.
pub fn load_corpus(root: &Path) -> Result<Corpus> {
    let files = walker::discover_files(root)?;
    let documents: Vec<Document> = files
        .par_iter()
        .filter_map(|file| match parse_document(file) {
            Ok(doc) => Some(doc),
            Err(error) => {
                tracing::warn!(
                    file = %file.relative_path.display(),
                    %error,
                    "skipping unreadable corpus file"
                );
                None
            }
        })
        .collect();
    tracing::debug!(documents = documents.len(), root = %root.display(), "corpus loaded");
    Ok(Corpus::new(documents))
}
