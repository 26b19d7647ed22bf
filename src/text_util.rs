/// Default number of lines in a snippet when no match is found.
pub const DEFAULT_SNIPPET_LINES: usize = 6;

/// Maximum number of characters in a snippet before truncation.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 400;

/// Truncate `text` to at most `max_chars` characters, appending `...` when
/// anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Extract a snippet around the first occurrence of `query` in `text`.
///
/// Returns `(snippet_text, start_line_number)` where start_line_number is
/// 1-indexed. If `query` is not found, returns the first few lines.
/// Returns `None` if the text is empty.
pub fn extract_snippet(text: &str, query: &str) -> Option<(String, usize)> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return None;
    }

    let query_lower = query.to_lowercase();
    let mut match_idx = None;

    for (idx, line) in lines.iter().enumerate() {
        if line.to_lowercase().contains(&query_lower) {
            match_idx = Some(idx);
            break;
        }
    }

    let (start, end) = if let Some(idx) = match_idx {
        let start = idx.saturating_sub(2);
        let end = (idx + 3).min(lines.len());
        (start, end)
    } else {
        (0, DEFAULT_SNIPPET_LINES.min(lines.len()))
    };

    let snippet = preview(&lines[start..end].join("\n"), DEFAULT_SNIPPET_MAX_CHARS);

    Some((snippet, start + 1))
}

/// Reduce markdown body text to a plain-text display form.
///
/// Strips heading, list, and blockquote markers, emphasis and inline-code
/// characters, and rewrites `[label](url)` links to their label.
pub fn render_plain(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    for line in markdown.lines() {
        let trimmed = line.trim_start();
        let without_heading = trimmed.trim_start_matches('#').trim_start();
        let without_quote =
            without_heading.strip_prefix("> ").unwrap_or(without_heading);
        let without_bullet = without_quote
            .strip_prefix("- ")
            .or_else(|| without_quote.strip_prefix("* "))
            .unwrap_or(without_quote);
        out.push_str(&strip_inline(without_bullet));
        out.push('\n');
    }
    // lines() drops the trailing newline; keep output shape consistent with
    // the input instead of always appending one.
    if !markdown.ends_with('\n') {
        out.pop();
    }
    out
}

fn strip_inline(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' | '_' | '`' | '[' => {}
            ']' => {
                // `[label](url)` keeps the label; the url part is dropped.
                if chars.peek() == Some(&'(') {
                    for inner in chars.by_ref() {
                        if inner == ')' {
                            break;
                        }
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}
