/// Metadata header parsed from the top of a corpus file.
///
/// Fields the header omits stay `None`/empty and are defaulted by the
/// ingestion layer (`title` falls back to the filename stem).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub topic: Option<String>,
    pub tags: Vec<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Split a file into its header metadata and body text.
///
/// A header is a block of `key: value` lines between two `---` marker lines
/// at the very top of the file. A file without an opening marker, without a
/// closing marker, or with an undecodable block is treated as having no
/// header: the entire content becomes the body and metadata stays default.
pub fn parse(content: &str) -> (Frontmatter, &str) {
    let Some((header, body)) = split_header(content) else {
        return (Frontmatter::default(), content);
    };

    match parse_block(header) {
        Some(frontmatter) => (frontmatter, body),
        None => (Frontmatter::default(), content),
    }
}

/// Locate the header block. Returns `(header_lines, body)` or `None` when
/// the content has no well-delimited header.
fn split_header(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim() == "---" {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

/// Decode the header lines into typed fields.
///
/// Known keys: `title`, `topic`, `tags`, `created`, `updated`; unknown keys
/// are ignored. `tags` accepts a bracketed inline list, a comma-separated
/// scalar, or indented `- item` lines. Any line that is neither blank, a
/// `key: value` pair, nor a tag list item makes the whole block undecodable.
fn parse_block(header: &str) -> Option<Frontmatter> {
    let mut frontmatter = Frontmatter::default();
    let mut in_tag_list = false;

    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if in_tag_list && let Some(item) = trimmed.strip_prefix("- ") {
            let item = unquote(item);
            if !item.is_empty() {
                frontmatter.tags.push(item);
            }
            continue;
        }
        in_tag_list = false;

        let (key, value) = trimmed.split_once(':')?;
        let key = key.trim();
        let value = value.trim();

        match key {
            "title" => frontmatter.title = non_empty(value),
            "topic" => frontmatter.topic = non_empty(value),
            "created" => frontmatter.created = non_empty(value),
            "updated" => frontmatter.updated = non_empty(value),
            "tags" => {
                if value.is_empty() {
                    in_tag_list = true;
                } else {
                    frontmatter.tags = parse_tags(value);
                }
            }
            _ => {}
        }
    }

    Some(frontmatter)
}

fn parse_tags(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(unquote)
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let value = unquote(value);
    (!value.is_empty()).then_some(value)
}

fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    let stripped = trimmed
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| {
            trimmed.strip_prefix('\'').and_then(|v| v.strip_suffix('\''))
        })
        .unwrap_or(trimmed);
    stripped.trim().to_string()
}
