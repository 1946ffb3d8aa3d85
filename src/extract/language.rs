//! Heuristic language classification
//!
//! Languages are tried in table order and the first one with any matching
//! signature wins. This is not a scorer: C sits before C++ and both match
//! `#include <...>`, so included C++ sources classify as C.

use crate::error::{ExtractError, Result};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Language tag attached to a code block
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    Java,
    C,
    Cpp,
    Html,
    Css,
    Sql,
    Bash,
    Dockerfile,
    Json,
    Yaml,
    Xml,
    /// Fallback when nothing matched
    Text,
    /// A declared fence tag outside the known set, lower-cased
    Other(String),
}

impl Language {
    /// Resolve a tag (as written on a fence) to a language
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        match tag.as_str() {
            "python" => Language::Python,
            "javascript" => Language::JavaScript,
            "java" => Language::Java,
            "c" => Language::C,
            "cpp" => Language::Cpp,
            "html" => Language::Html,
            "css" => Language::Css,
            "sql" => Language::Sql,
            "bash" => Language::Bash,
            "dockerfile" => Language::Dockerfile,
            "json" => Language::Json,
            "yaml" => Language::Yaml,
            "xml" => Language::Xml,
            "txt" => Language::Text,
            _ => Language::Other(tag),
        }
    }

    /// Tag used in filenames and manifests
    pub fn tag(&self) -> &str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Html => "html",
            Language::Css => "css",
            Language::Sql => "sql",
            Language::Bash => "bash",
            Language::Dockerfile => "dockerfile",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Xml => "xml",
            Language::Text => "txt",
            Language::Other(tag) => tag,
        }
    }

    /// File extension including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => ".py",
            Language::JavaScript => ".js",
            Language::Java => ".java",
            Language::C => ".c",
            Language::Cpp => ".cpp",
            Language::Html => ".html",
            Language::Css => ".css",
            Language::Sql => ".sql",
            Language::Bash => ".sh",
            Language::Dockerfile => ".dockerfile",
            Language::Json => ".json",
            Language::Yaml => ".yml",
            Language::Xml => ".xml",
            Language::Text | Language::Other(_) => ".txt",
        }
    }

    /// Whether this is the plain text fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, Language::Text)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Built-in signature table, in priority order
const BUILTIN_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            r"def\s+\w+\(",
            r"import\s+\w+",
            r"from\s+\w+\s+import",
            r"print\s*\(",
            r"class\s+\w+",
        ],
    ),
    (
        "javascript",
        &[
            r"function\s+\w+\(",
            r"const\s+\w+\s*=",
            r"let\s+\w+\s*=",
            r"console\.log\(",
            r"document\.",
        ],
    ),
    (
        "java",
        &[
            r"public\s+class\s+\w+",
            r"public\s+static\s+void\s+main",
            r"System\.out\.print",
        ],
    ),
    ("c", &[r"#include\s*<", r"int\s+main\s*\(", r"printf\s*\("]),
    ("cpp", &[r"#include\s*<", r"std::", r"cout\s*<<"]),
    ("html", &[r"<html", r"<div", r"<body", r"<!DOCTYPE"]),
    (
        "css",
        &[r"\w+\s*\{[^}]*\}", r"@media", r"\.[\w-]+\s*\{"],
    ),
    (
        "sql",
        &[r"SELECT\s+", r"FROM\s+", r"WHERE\s+", r"INSERT\s+INTO"],
    ),
    (
        "bash",
        &[r"#!/bin/bash", r"echo\s+", r"\$\w+", r"if\s*\[\s*"],
    ),
    (
        "dockerfile",
        &[
            r"FROM\s+\w+",
            r"RUN\s+",
            r"COPY\s+",
            r"WORKDIR\s+",
            r"EXPOSE\s+",
            r"CMD\s*\[",
        ],
    ),
    ("json", &[r"^\s*\{", r"^\s*\[", r#""\w+":\s*"#]),
    ("yaml", &[r"^\w+:", r"^\s*-\s+\w+"]),
    ("xml", &[r"<\?xml", r"<\w+.*>.*</\w+>"]),
];

/// Generic "looks like programming syntax" signatures
const CODE_SIGNALS: &[&str] = &[
    r"[a-zA-Z_]\w*\s*\(",
    r"[a-zA-Z_]\w*\s*=",
    r"\{[^}]*\}",
    r#"["'][^"']*["']"#,
    r"//.*|/\*.*\*/|#.*",
    r"\w+\.\w+",
    r"if\s*\(|while\s*\(|for\s*\(",
    r"</?\w+[^>]*>",
    r"[a-zA-Z-]+:\s*[^;]+;",
];

static BUILTIN_TABLE: LazyLock<SignatureTable> = LazyLock::new(|| {
    let table: Vec<(Language, &[&str])> = BUILTIN_SIGNATURES
        .iter()
        .map(|(tag, patterns)| (Language::from_tag(tag), *patterns))
        .collect();
    SignatureTable::from_patterns(&table)
        .expect("BUILTIN_SIGNATURES: hardcoded regexes are statically valid")
});

static CODE_SIGNAL_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CODE_SIGNALS
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("CODE_SIGNALS: hardcoded regexes are statically valid")
        })
        .collect()
});

/// Ordered mapping from language to its compiled signatures
#[derive(Debug, Clone)]
pub struct SignatureTable {
    entries: Vec<(Language, Vec<Regex>)>,
}

impl SignatureTable {
    /// Compile a table from (language, patterns) pairs, keeping their order
    pub fn from_patterns(table: &[(Language, &[&str])]) -> Result<Self> {
        let mut entries = Vec::with_capacity(table.len());

        for (language, patterns) in table {
            let compiled = patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(p)
                        .case_insensitive(true)
                        .multi_line(true)
                        .build()
                        .map_err(|source| ExtractError::Pattern {
                            language: language.to_string(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            entries.push((language.clone(), compiled));
        }

        Ok(Self { entries })
    }

    /// The built-in table
    pub fn builtin() -> &'static SignatureTable {
        &BUILTIN_TABLE
    }

    /// Languages in priority order
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter().map(|(language, _)| language)
    }

    /// First language in table order with any matching signature
    pub fn classify(&self, text: &str) -> Language {
        self.entries
            .iter()
            .find(|(_, signatures)| signatures.iter().any(|re| re.is_match(text)))
            .map(|(language, _)| language.clone())
            .unwrap_or(Language::Text)
    }
}

/// Number of distinct generic code signatures present in `text`
pub fn code_signal_count(text: &str) -> usize {
    CODE_SIGNAL_RES.iter().filter(|re| re.is_match(text)).count()
}

/// Whether `text` plausibly is code rather than indented prose
pub fn looks_like_code(text: &str, min_signals: usize) -> bool {
    code_signal_count(text) >= min_signals
}
