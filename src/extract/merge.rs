//! Merging fenced and indented detections

use super::CodeBlock;

/// An indented block repeats a fenced one when it starts within `window`
/// lines of it and its content is contained in the fenced content.
pub fn is_duplicate(indented: &CodeBlock, fenced: &CodeBlock, window: usize) -> bool {
    indented.start_line.abs_diff(fenced.start_line) < window
        && fenced.content.contains(indented.content.as_str())
}

/// All fenced blocks followed by the indented blocks that do not repeat any
/// of them. Each input keeps its own order.
pub fn merge_blocks(
    fenced: Vec<CodeBlock>,
    indented: Vec<CodeBlock>,
    window: usize,
) -> Vec<CodeBlock> {
    let fenced_count = fenced.len();
    let mut merged = fenced;

    for block in indented {
        if merged[..fenced_count]
            .iter()
            .any(|existing| is_duplicate(&block, existing, window))
        {
            tracing::debug!(
                line = block.start_line,
                fingerprint = %block.fingerprint,
                "dropping indented block already covered by a fenced block"
            );
            continue;
        }
        merged.push(block);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Language;

    const FENCED: &str = "def handler(event):\n    total = compute(event)\n    return total";

    #[test]
    fn test_substring_near_fence_is_dropped() {
        let fenced = CodeBlock::new(FENCED, Language::Python, 10);
        let indented = CodeBlock::new("total = compute(event)\n    return total", Language::Text, 12);

        let merged = merge_blocks(vec![fenced.clone()], vec![indented], 5);
        assert_eq!(merged, vec![fenced]);
    }

    #[test]
    fn test_distant_substring_is_kept() {
        let fenced = CodeBlock::new(FENCED, Language::Python, 10);
        let indented = CodeBlock::new("total = compute(event)\n    return total", Language::Text, 15);

        let merged = merge_blocks(vec![fenced], vec![indented], 5);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_window_is_symmetric() {
        let fenced = CodeBlock::new(FENCED, Language::Python, 12);
        let indented = CodeBlock::new("return total", Language::Text, 8);
        assert!(is_duplicate(&indented, &fenced, 5));
    }

    #[test]
    fn test_near_but_different_is_kept() {
        let fenced = CodeBlock::new(FENCED, Language::Python, 10);
        let indented = CodeBlock::new("answer = other(thing)\n    more = stuff", Language::Text, 11);

        let merged = merge_blocks(vec![fenced], vec![indented], 5);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_fenced_first_ordering() {
        let early_indented = CodeBlock::new("early = block(one)\n    more = x", Language::Text, 2);
        let late_fenced = CodeBlock::new("late = fenced(block)", Language::Text, 80);

        let merged = merge_blocks(vec![late_fenced], vec![early_indented], 5);
        assert_eq!(merged[0].start_line, 80);
        assert_eq!(merged[1].start_line, 2);
    }
}
