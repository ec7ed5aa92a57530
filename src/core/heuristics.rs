//! Language-independent extraction heuristics.
//!
//! Every per-language extractor relies on the same three capabilities: a basic
//! cleanup pass over raw matches and two natural-language checks. They are
//! injected through [`BaseExtraction`] so language filters can be exercised
//! with stub implementations.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::{contains_alphabetic, is_numeric_literal};

pub trait BaseExtraction {
    /// Basic cleanup applied to the general bucket before UI strings are merged in.
    ///
    /// Keeps order and the original text of survivors.
    fn filter_strings(&self, strings: Vec<String>) -> Vec<String>;

    fn has_natural_language_characteristics(&self, text: &str) -> bool;

    fn is_valid_string_for_translation(&self, text: &str) -> bool;
}

static CAPITALIZED_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());

static SENTENCE_PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,:;!?]").unwrap());

static ASSET_EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpg|jpeg|gif|svg|pdf|ttf|mp3|mp4|html|js|css)$").unwrap()
});

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{3,8}$").unwrap());

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*([A-Z][a-zA-Z0-9]*)+$").unwrap());

static SNAKE_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)+$").unwrap());

/// Default heuristics shared by all extractors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeuristics;

impl BaseExtraction for DefaultHeuristics {
    fn filter_strings(&self, strings: Vec<String>) -> Vec<String> {
        strings
            .into_iter()
            .filter(|s| {
                let text = s.trim();
                text.chars().count() >= 2 && contains_alphabetic(text)
            })
            .collect()
    }

    fn has_natural_language_characteristics(&self, text: &str) -> bool {
        let s = text.trim();

        if s.contains(' ') {
            return true;
        }

        if SENTENCE_PUNCTUATION_REGEX.is_match(s) {
            return true;
        }

        s.len() > 1 && CAPITALIZED_WORD_REGEX.is_match(s)
    }

    fn is_valid_string_for_translation(&self, text: &str) -> bool {
        let s = text.trim();

        if s.chars().count() < 2 {
            return false;
        }

        // Paths, URLs with a leading slash, asset names
        if s.starts_with(['.', '/', '\\']) || ASSET_EXTENSION_REGEX.is_match(s) {
            return false;
        }

        if is_numeric_literal(s) || HEX_COLOR_REGEX.is_match(s) {
            return false;
        }

        !(CAMEL_CASE_REGEX.is_match(s) || SNAKE_CASE_REGEX.is_match(s))
    }
}
