//! Fenced code block detection
//!
//! A fence is three backticks with an optional word-character tag, a body,
//! and three backticks after a newline. An opening fence with no closing
//! fence produces nothing.

use super::{CodeBlock, Language, SignatureTable};
use regex::Regex;
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(\w+)?\n(.*?)\n```")
        .expect("FENCE_RE: hardcoded regex is statically valid")
});

/// Find every fenced block whose trimmed body is longer than `min_chars`
pub fn detect(content: &str, table: &SignatureTable, min_chars: usize) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();

    for caps in FENCE_RE.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let body = caps.get(2).map_or("", |m| m.as_str()).trim();

        if body.chars().count() <= min_chars {
            tracing::debug!(chars = body.chars().count(), "skipping short fenced block");
            continue;
        }

        let language = match caps.get(1) {
            Some(tag) => Language::from_tag(tag.as_str()),
            None => table.classify(body),
        };
        let start_line = content[..whole.start()].matches('\n').count();

        blocks.push(CodeBlock::new(body, language, start_line));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fingerprint;

    fn detect_default(content: &str) -> Vec<CodeBlock> {
        detect(content, SignatureTable::builtin(), 20)
    }

    #[test]
    fn test_detect_multiple_fences() {
        let content = r#"
# Example

```rust
fn main() {
    println!("Hello");
}
```

```python
print("Hello from python")
```
"#;

        let blocks = detect_default(content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, Language::from_tag("rust"));
        assert_eq!(blocks[1].language, Language::Python);
        assert_eq!(blocks[0].start_line, 3);
        assert_eq!(blocks[1].start_line, 9);
        for block in &blocks {
            assert_eq!(block.fingerprint, fingerprint(&block.content));
        }
    }

    #[test]
    fn test_adjacent_fences() {
        let content = "```\nSELECT name FROM users;\n```\n```\nconsole.log(\"adjacent\");\n```";

        let blocks = detect_default(content);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, Language::Sql);
        assert_eq!(blocks[1].language, Language::JavaScript);
    }

    #[test]
    fn test_declared_tag_is_lowercased() {
        let content = "```JSON\n{\"name\": \"codeharvest\", \"ok\": true}\n```";
        let blocks = detect_default(content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, Language::Json);
    }

    #[test]
    fn test_length_boundary() {
        let twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);

        assert!(detect_default(&format!("```\n{}\n```", twenty)).is_empty());
        assert_eq!(detect_default(&format!("```\n{}\n```", twenty_one)).len(), 1);
        // Surrounding whitespace does not count
        assert!(detect_default(&format!("```\n   {}   \n```", twenty)).is_empty());

        // Counted in characters, not bytes
        let accented = "é".repeat(20);
        assert_eq!(accented.len(), 40);
        assert!(detect_default(&format!("```\n{}\n```", accented)).is_empty());
        let accented_one_more = "é".repeat(21);
        assert_eq!(
            detect_default(&format!("```\n{}\n```", accented_one_more)).len(),
            1
        );
    }

    #[test]
    fn test_unterminated_fence() {
        let content = "```python\nimport os\nprint(os.getcwd())\n";
        assert!(detect_default(content).is_empty());
    }

    #[test]
    fn test_undeclared_falls_back_to_text() {
        let content = "```\nthe quick brown fox jumps over\n```";
        let blocks = detect_default(content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, Language::Text);
    }
}
