//! Indented code block detection
//!
//! Groups runs of lines indented by four spaces or a tab. Blank lines extend
//! an open group but never start one. Because there is no delimiter, a group
//! must also pass the size limits and the code-likelihood check.

use super::{looks_like_code, CodeBlock, SignatureTable};
use crate::config::Thresholds;

fn is_indented(line: &str) -> bool {
    line.starts_with("    ") || line.starts_with('\t')
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Find indented blocks that look like code
pub fn detect(content: &str, table: &SignatureTable, thresholds: &Thresholds) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut group: Vec<&str> = Vec::new();
    let mut group_start = 0;

    for (i, line) in content.split('\n').enumerate() {
        if is_indented(line) || (is_blank(line) && !group.is_empty()) {
            if group.is_empty() {
                group_start = i;
            }
            group.push(line);
        } else if !group.is_empty() {
            if let Some(block) = close_group(&group, group_start, table, thresholds) {
                blocks.push(block);
            }
            group.clear();
        }
    }

    if !group.is_empty() {
        if let Some(block) = close_group(&group, group_start, table, thresholds) {
            blocks.push(block);
        }
    }

    blocks
}

/// Apply the acceptance gate to a finished group
fn close_group(
    group: &[&str],
    start_line: usize,
    table: &SignatureTable,
    thresholds: &Thresholds,
) -> Option<CodeBlock> {
    if group.iter().all(|line| is_blank(line)) {
        return None;
    }

    let joined = group.join("\n");
    let content = joined.trim();

    if group.len() <= thresholds.indented_min_lines
        || content.chars().count() <= thresholds.indented_min_chars
    {
        tracing::debug!(
            line = start_line,
            lines = group.len(),
            "indented group below size limits"
        );
        return None;
    }

    if !looks_like_code(content, thresholds.code_signal_min) {
        tracing::debug!(line = start_line, "indented group does not look like code");
        return None;
    }

    let language = table.classify(content);
    Some(CodeBlock::new(content, language, start_line))
}
