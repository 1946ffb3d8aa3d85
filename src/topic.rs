//! Topic naming
//!
//! A topic slug names the directory a document's blocks are saved into. It
//! comes from the first title-like line in the document, or the filename.

use regex::{Regex, RegexBuilder};
use std::path::Path;
use std::sync::LazyLock;

/// Slug used when neither content nor filename yields one
pub const UNKNOWN_TOPIC: &str = "unknown_topic";

/// Title patterns in priority order: H1, H2, `Title:`, `Subject:`
static TITLE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^#\s+(.+)$",
        r"^##\s+(.+)$",
        r"^Title:\s*(.+)$",
        r"^Subject:\s*(.+)$",
    ]
    .iter()
    .map(|p| {
        RegexBuilder::new(p)
            .multi_line(true)
            .case_insensitive(true)
            .build()
            .expect("TITLE_RES: hardcoded regex is statically valid")
    })
    .collect()
});

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s-]").expect("DISALLOWED_RE: hardcoded regex is statically valid")
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_RE: hardcoded regex is statically valid")
});

/// Turn free text into a slug: drop punctuation, join words with `_`, cap length
pub fn slugify(text: &str, max_len: usize) -> String {
    let cleaned = DISALLOWED_RE.replace_all(text, "");
    let joined = WHITESPACE_RE.replace_all(cleaned.trim(), "_");
    joined.chars().take(max_len).collect()
}

/// Title text from the highest-priority pattern that matches anywhere
pub fn find_title(content: &str) -> Option<&str> {
    TITLE_RES
        .iter()
        .find_map(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Derive the topic slug for a document
pub fn topic_name(path: &Path, content: &str, max_len: usize) -> String {
    if let Some(title) = find_title(content) {
        let slug = slugify(title, max_len);
        if !slug.is_empty() {
            return slug;
        }
        tracing::debug!(title, "title has no usable characters, using filename");
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| UNKNOWN_TOPIC.to_string())
}
