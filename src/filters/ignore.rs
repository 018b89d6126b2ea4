//! Gitignore-style exclusion rules
//!
//! Rules are evaluated in two passes. Every non-negated pattern is tried
//! first; only a path excluded there is checked against the `!` patterns for
//! re-inclusion. The relative order of negated and non-negated lines in the
//! source file does not affect the result.
//!
//! Supported pattern shapes:
//!
//! ```text
//! /dist        rooted: "dist" or anything under it, at the root only
//! build/       directory: a "build" segment at any depth
//! *.log        single wildcard: suffix, prefix, or basename match
//! docs/api     plain with a slash: anchored path
//! README.md    plain: any single path segment
//! ```
//!
//! Character classes and `**` are not supported; a pattern with more than one
//! `*` is compared literally against path segments.

use super::{Candidate, Filter, FilterDecision};
use crate::shared::paths::normalize_separators;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

/// A single parsed ignore line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// Pattern text with any leading `!` removed
    pub pattern: String,
    /// Whether the line re-includes paths (`!pattern`)
    pub negated: bool,
}

impl IgnoreRule {
    pub fn matches(&self, path: &str) -> bool {
        matches_pattern(path, &self.pattern)
    }
}

/// Ordered set of ignore rules, immutable once the walk starts
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse ignore-file text, skipping blank lines and `#` comments
    pub fn parse(content: &str) -> Self {
        let mut rules = Self::new();
        rules.extend(content.lines());
        rules
    }

    /// Load rules from an ignore file
    ///
    /// A missing file yields an empty rule set. A file that exists but cannot
    /// be read is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let rules = Self::parse(&content);
                tracing::debug!("Loaded {} ignore rules from {}", rules.len(), path.display());
                Ok(rules)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No ignore file at {}", path.display());
                Ok(Self::new())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read ignore file: {}", path.display())),
        }
    }

    /// Append patterns, applying the same line rules as [`IgnoreRules::parse`]
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let rule = match line.strip_prefix('!') {
                Some(pattern) => IgnoreRule {
                    pattern: pattern.to_string(),
                    negated: true,
                },
                None => IgnoreRule {
                    pattern: line.to_string(),
                    negated: false,
                },
            };
            self.rules.push(rule);
        }
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decide whether a root-relative path is excluded
    pub fn should_ignore(&self, relative_path: &str) -> bool {
        let path = normalize_separators(relative_path);

        let excluded = self
            .rules
            .iter()
            .filter(|rule| !rule.negated)
            .any(|rule| rule.matches(&path));
        if !excluded {
            return false;
        }

        let reincluded = self
            .rules
            .iter()
            .filter(|rule| rule.negated)
            .any(|rule| rule.matches(&path));
        if reincluded {
            tracing::trace!("Path re-included by negated rule: {}", path);
        }

        !reincluded
    }
}

/// Match one forward-slash path against one pattern (without its `!`)
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rooted) = pattern.strip_prefix('/') {
        // "/dist/" anchors the directory the same way "/dist" does
        let rooted = rooted.strip_suffix('/').unwrap_or(rooted);
        return path == rooted || has_dir_prefix(path, rooted);
    }

    if let Some(dir) = pattern.strip_suffix('/') {
        return path == dir
            || has_dir_prefix(path, dir)
            || path.ends_with(&format!("/{dir}"))
            || path.contains(&format!("/{dir}/"));
    }

    if let Some((prefix, suffix)) = pattern.split_once('*')
        && !suffix.contains('*')
    {
        return match (prefix.is_empty(), suffix.is_empty()) {
            (true, _) => path.ends_with(suffix),
            (false, true) => path.starts_with(prefix),
            (false, false) if prefix.contains('/') => {
                path.starts_with(prefix) && path.ends_with(suffix)
            }
            (false, false) => {
                let basename = path.rsplit('/').next().unwrap_or(path);
                basename.starts_with(prefix) && basename.ends_with(suffix)
            }
        };
    }

    if pattern.contains('/') {
        path == pattern || has_dir_prefix(path, pattern)
    } else {
        path.split('/').any(|segment| segment == pattern)
    }
}

/// `path` lies strictly under the directory `dir`
fn has_dir_prefix(path: &str, dir: &str) -> bool {
    path.strip_prefix(dir)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Skips candidates excluded by the ignore rules
pub struct IgnoreFilter {
    rules: IgnoreRules,
}

impl IgnoreFilter {
    pub fn new(rules: IgnoreRules) -> Self {
        Self { rules }
    }
}

impl Filter for IgnoreFilter {
    fn filter(&self, candidate: &Candidate<'_>) -> FilterDecision {
        if self.rules.should_ignore(candidate.relative) {
            FilterDecision::Skip("gitignored file")
        } else {
            FilterDecision::Process
        }
    }

    fn name(&self) -> &'static str {
        "IgnoreFilter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let rules = IgnoreRules::parse("\n# Comment line\n*.log\n   \n  dist/  \n!build/keep.txt\n");

        assert_eq!(
            rules.rules(),
            &[
                IgnoreRule { pattern: "*.log".to_string(), negated: false },
                IgnoreRule { pattern: "dist/".to_string(), negated: false },
                IgnoreRule { pattern: "build/keep.txt".to_string(), negated: true },
            ]
        );
    }

    #[test]
    fn test_pattern_matching() {
        let cases = [
            ("file.txt", "file.txt", true),
            ("dir/file.txt", "file.txt", true),
            ("file.log", "*.log", true),
            ("dir/file.log", "*.log", true),
            ("dir/subdir/file.log", "dir/*.log", true),
            ("dir/file.log", "dir/*.log", true),
            ("other/file.log", "dir/*.log", false),
            ("build/output.txt", "build/", true),
            ("build", "build/", true),
            ("docs/build/output.txt", "build/", true),
            ("docs/build", "build/", true),
            ("builder/output.txt", "build/", false),
            ("src/main.go", "*.js", false),
            ("node_modules/file.js", "node_modules/", true),
            ("dir/node_modules/file.js", "node_modules/", true),
            ("dist/bundle.js", "dist/", true),
            ("README.md", "*.md", true),
            ("tmp-cache/data.json", "tmp*", true),
            ("src/test_utils.py", "test_*.py", true),
            ("test_dir/utils.py", "test_*.py", false),
            ("docs/api/index.html", "docs/api", true),
            ("docs/api", "docs/api", true),
            ("src/docs/api/index.html", "docs/api", false),
            ("a/b/c.txt", "a*b*c.txt", false),
        ];

        for (path, pattern, expected) in cases {
            assert_eq!(
                matches_pattern(path, pattern),
                expected,
                "matches_pattern({path:?}, {pattern:?})"
            );
        }
    }

    #[test]
    fn test_rooted_patterns_anchor_to_root() {
        assert!(matches_pattern("dist/file.js", "/dist/"));
        assert!(matches_pattern("dist", "/dist"));
        assert!(matches_pattern("dist/file.js", "/dist"));
        assert!(!matches_pattern("src/dist/file.js", "/dist/"));
        assert!(!matches_pattern("src/dist/file", "/dist"));
        assert!(!matches_pattern("distribution/file.js", "/dist"));
    }

    #[test]
    fn test_lone_wildcard_matches_everything() {
        assert!(matches_pattern("any/path/at/all.rs", "*"));
    }

    #[test]
    fn test_negation_precedence() {
        let rules = IgnoreRules::parse("build/\n!build/keep.txt\n");

        assert!(!rules.should_ignore("build/keep.txt"));
        assert!(rules.should_ignore("build/other.txt"));
    }

    #[test]
    fn test_negation_order_does_not_matter() {
        let rules = IgnoreRules::parse("!build/keep.txt\nbuild/\n");

        assert!(!rules.should_ignore("build/keep.txt"));
        assert!(rules.should_ignore("build/other.txt"));
    }

    #[test]
    fn test_negation_without_exclusion_is_irrelevant() {
        let rules = IgnoreRules::parse("!src/main.go\n");
        assert!(!rules.should_ignore("src/main.go"));
        assert!(!rules.should_ignore("src/lib.go"));
    }

    #[test]
    fn test_gitignore_file_semantics() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let gitignore = temp_dir.path().join(".gitignore");
        fs::write(
            &gitignore,
            "\n# Comment line\n*.log\ndist/\nbuild/\n!build/important.txt\nnode_modules/\n",
        )?;

        let rules = IgnoreRules::from_file(&gitignore)?;
        let cases = [
            ("file.log", true),
            ("src/nested.log", true),
            ("dist/app.js", true),
            ("build/output.txt", true),
            ("build/important.txt", false),
            ("node_modules/package/index.js", true),
            ("a/node_modules/b.js", true),
            ("src/main.go", false),
            ("README.md", false),
        ];

        for (path, expected) in cases {
            assert_eq!(rules.should_ignore(path), expected, "should_ignore({path:?})");
        }
        Ok(())
    }

    #[test]
    fn test_missing_file_ignores_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let rules = IgnoreRules::from_file(&temp_dir.path().join(".gitignore"))?;

        assert!(rules.is_empty());
        assert!(!rules.should_ignore("any-file.txt"));
        assert!(!rules.should_ignore("build/output.txt"));
        Ok(())
    }

    #[test]
    fn test_unreadable_source_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        // A directory in place of the file cannot be read as text
        let gitignore = temp_dir.path().join(".gitignore");
        fs::create_dir(&gitignore)?;

        assert!(IgnoreRules::from_file(&gitignore).is_err());
        Ok(())
    }

    #[test]
    fn test_extend_appends_additional_patterns() {
        let mut rules = IgnoreRules::parse("*.log\n");
        rules.extend(["generated/", "", "# not a rule"]);

        assert_eq!(rules.len(), 2);
        assert!(rules.should_ignore("src/generated/schema.rs"));
    }

    #[test]
    fn test_ignore_filter_decision() {
        let filter = IgnoreFilter::new(IgnoreRules::parse("*.log\n"));
        let skipped = Candidate::new(Path::new("/root/debug.log"), "debug.log");
        let kept = Candidate::new(Path::new("/root/main.rs"), "main.rs");

        assert_eq!(filter.filter(&skipped), FilterDecision::Skip("gitignored file"));
        assert_eq!(filter.filter(&kept), FilterDecision::Process);
    }
}
