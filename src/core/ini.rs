// ============================================================================
// Toxide - INI Configuration Parser
// ============================================================================
//
// File: src/core/ini.rs
// Responsibility: raw tox-style INI document parsing
// Boundaries:
//   - ✅ Section and entry tokenization
//   - ✅ Multi-line value continuation
//   - ✅ Comment and blank line handling
//   - ✅ Syntax error reporting with line numbers
//   - ❌ No value interpretation (lists, booleans, placeholders)
//   - ❌ No environment inheritance logic
//   - ❌ No file format generation
//
// ============================================================================

use std::path::{Path, PathBuf};
use thiserror::Error;

/// INI parsing errors
#[derive(Debug, Error)]
pub enum IniError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// A single `[name]` section with its entries in declaration order
#[derive(Debug, Clone)]
pub struct IniSection {
    /// Section name without brackets
    pub name: String,
    /// Key/value entries in declaration order
    pub entries: Vec<(String, String)>,
}

impl IniSection {
    fn new(name: String) -> Self {
        Self { name, entries: Vec::new() }
    }

    /// First value declared for `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// All keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// An ordered collection of sections parsed from one file
#[derive(Debug, Clone, Default)]
pub struct IniDocument {
    /// Sections in declaration order
    pub sections: Vec<IniSection>,
}

impl IniDocument {
    /// Parse a document from text
    pub fn parse(content: &str) -> Result<Self, IniError> {
        let mut document = IniDocument::default();

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim_end();

            if line.trim().is_empty() {
                continue;
            }

            // Full-line comments, including indented ones
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = line.starts_with(' ') || line.starts_with('\t');

            if !indented && trimmed.starts_with('[') {
                let name = trimmed
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| IniError::Syntax {
                        line: line_no,
                        message: format!("malformed section header: {}", trimmed),
                    })?;
                document.sections.push(IniSection::new(name.to_string()));
                continue;
            }

            if indented {
                // Continuation of the previous entry's value
                let section = document.sections.last_mut().ok_or_else(|| IniError::Syntax {
                    line: line_no,
                    message: "continuation line outside of any section".to_string(),
                })?;
                let (_, value) = section.entries.last_mut().ok_or_else(|| IniError::Syntax {
                    line: line_no,
                    message: "continuation line without a preceding entry".to_string(),
                })?;
                if value.is_empty() {
                    value.push_str(trimmed);
                } else {
                    value.push('\n');
                    value.push_str(trimmed);
                }
                continue;
            }

            // Plain `key = value` entry
            let section = document.sections.last_mut().ok_or_else(|| IniError::Syntax {
                line: line_no,
                message: format!("entry before any section header: {}", trimmed),
            })?;
            let (key, value) = trimmed.split_once('=').ok_or_else(|| IniError::Syntax {
                line: line_no,
                message: format!("expected `key = value`, got: {}", trimmed),
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(IniError::Syntax {
                    line: line_no,
                    message: "entry with empty key".to_string(),
                });
            }
            section.entries.push((key.to_string(), value.trim().to_string()));
        }

        Ok(document)
    }

    /// Parse a document from a file on disk
    pub fn from_file(path: &Path) -> Result<Self, IniError> {
        let content = std::fs::read_to_string(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Look up a section by exact name
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Names of all sections in declaration order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }
}

/// Split a list value on commas, whitespace and newlines
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a value into its non-empty lines
pub fn parse_lines(value: &str) -> Vec<String> {
    value.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect()
}

/// Interpret a boolean value the way tox does
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[tox]
distshare = {homedir}/.tox/distshare
envlist = lint,test

[testenv]
setenv =
    PYTHONPATH = {toxinidir}
deps = ./
commands =
    - py.test

# lint runs flake8 only
[testenv:lint]
basepython = python2.7
deps = flake8
commands =
    - flake8 mypkg

[pytest]
addopts = -v

[flake8]
ignore = E501,E12,E261,F403,W503
max_complexity = 10
exclude = .tox,dist,doc,*egg,build
"#;

    #[test]
    fn parses_all_sections_in_order() {
        let doc = IniDocument::parse(SAMPLE).unwrap();
        let names: Vec<_> = doc.section_names().collect();
        assert_eq!(names, vec!["tox", "testenv", "testenv:lint", "pytest", "flake8"]);
    }

    #[test]
    fn reads_simple_entries() {
        let doc = IniDocument::parse(SAMPLE).unwrap();
        let tox = doc.section("tox").unwrap();
        assert_eq!(tox.get("envlist"), Some("lint,test"));
        assert_eq!(tox.get("distshare"), Some("{homedir}/.tox/distshare"));
        assert_eq!(tox.get("missing"), None);
    }

    #[test]
    fn joins_continuation_lines() {
        let doc = IniDocument::parse(SAMPLE).unwrap();
        let testenv = doc.section("testenv").unwrap();
        assert_eq!(testenv.get("setenv"), Some("PYTHONPATH = {toxinidir}"));

        let multi = "[s]\ncommands =\n    first one\n    second two\n";
        let doc = IniDocument::parse(multi).unwrap();
        assert_eq!(doc.section("s").unwrap().get("commands"), Some("first one\nsecond two"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let doc = IniDocument::parse("# top\n[s]\n; note\na = 1\n\n  # indented comment\nb = 2\n")
            .unwrap();
        let s = doc.section("s").unwrap();
        assert_eq!(s.entries.len(), 2);
        assert_eq!(s.get("a"), Some("1"));
        assert_eq!(s.get("b"), Some("2"));
    }

    #[test]
    fn entry_before_section_is_an_error() {
        let err = IniDocument::parse("a = 1\n").unwrap_err();
        match err {
            IniError::Syntax { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn malformed_header_is_an_error() {
        assert!(IniDocument::parse("[broken\n").is_err());
        assert!(IniDocument::parse("[]\n").is_err());
    }

    #[test]
    fn entry_without_equals_is_an_error() {
        let err = IniDocument::parse("[s]\nnot-an-entry\n").unwrap_err();
        match err {
            IniError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn continuation_without_entry_is_an_error() {
        assert!(IniDocument::parse("[s]\n    dangling\n").is_err());
    }

    #[test]
    fn list_and_bool_helpers() {
        assert_eq!(parse_list("lint,test"), vec!["lint", "test"]);
        assert_eq!(parse_list("a, b  c\nd"), vec!["a", "b", "c", "d"]);
        assert!(parse_list("").is_empty());
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
