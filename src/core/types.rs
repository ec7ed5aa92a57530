//! Shared data types for the extraction pipeline.

use std::{collections::HashSet, path::Path};

use regex::Regex;

/// Rule name that routes matches into the UI-labeled bucket.
pub const TEXT_COMPONENT_TAG: &str = "text_component";

/// File name suffixes handled with the markup ruleset.
pub const MARKUP_SUFFIXES: &[&str] = &[".storyboard", ".xib"];

/// Which ruleset a file is scanned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Interface-definition markup (`.storyboard`, `.xib`).
    Markup,
    /// Source code.
    Code,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        let is_markup = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| MARKUP_SUFFIXES.iter().any(|s| name.ends_with(s)));
        if is_markup {
            FileKind::Markup
        } else {
            FileKind::Code
        }
    }

    pub fn is_markup(self) -> bool {
        matches!(self, FileKind::Markup)
    }
}

/// A compiled extraction rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: String,
    pub regex: Regex,
}

impl PatternRule {
    pub fn new(name: &str, regex: Regex) -> Self {
        Self {
            name: name.to_string(),
            regex,
        }
    }

    pub fn is_text_component(&self) -> bool {
        self.name == TEXT_COMPONENT_TAG
    }
}

/// Extraction rules for one language, split by file kind.
#[derive(Debug, Clone, Default)]
pub struct PatternGroup {
    pub ui_patterns: Vec<PatternRule>,
    pub code_patterns: Vec<PatternRule>,
}

/// Configured exclusions applied by the advanced filter chain.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Any unanchored match rejects the string.
    pub filtering_patterns: Vec<Regex>,
    /// Exact-match rejections.
    pub keywords_to_ignore: HashSet<String>,
}

impl FilterConfig {
    pub fn matches_filtering_pattern(&self, text: &str) -> bool {
        self.filtering_patterns.iter().any(|re| re.is_match(text))
    }

    pub fn is_ignored_keyword(&self, text: &str) -> bool {
        self.keywords_to_ignore.contains(text)
    }
}

/// Raw matches produced by the pattern matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchBuckets {
    pub general: Vec<String>,
    /// Strings captured by `text_component` rules; these skip basic filtering.
    pub ui_labeled: Vec<String>,
}

impl MatchBuckets {
    pub fn len(&self) -> usize {
        self.general.len() + self.ui_labeled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
