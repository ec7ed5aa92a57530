//! Swift advanced filter chain.
//!
//! Each candidate is trimmed and run through a fixed sequence of gates. The
//! first gate that fires rejects the string; strings that pass every gate are
//! kept in encounter order. Gates are independent and stateless, so running
//! the chain over its own output is a no-op.

use std::fmt;

use crate::core::heuristics::{BaseExtraction, DefaultHeuristics};
use crate::core::swift::catalog::{is_common_parameter_name, is_system_string};
use crate::core::types::FilterConfig;

/// The gate that rejected a candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    Empty,
    SystemString,
    FilteringPattern,
    IgnoredKeyword,
    ParameterName,
    NotNaturalLanguage,
    NotTranslatable,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::Empty => "empty",
            Rejection::SystemString => "system-string",
            Rejection::FilteringPattern => "filtering-pattern",
            Rejection::IgnoredKeyword => "ignored-keyword",
            Rejection::ParameterName => "parameter-name",
            Rejection::NotNaturalLanguage => "not-natural-language",
            Rejection::NotTranslatable => "not-translatable",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwiftFilter<H = DefaultHeuristics> {
    config: FilterConfig,
    heuristics: H,
}

impl SwiftFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self::with_heuristics(config, DefaultHeuristics)
    }
}

impl<H: BaseExtraction> SwiftFilter<H> {
    pub fn with_heuristics(config: FilterConfig, heuristics: H) -> Self {
        Self { config, heuristics }
    }

    pub fn heuristics(&self) -> &H {
        &self.heuristics
    }

    /// Run the gates over one string and report the first one that rejects it.
    pub fn classify(&self, text: &str) -> Option<Rejection> {
        let s = text.trim();

        if s.is_empty() {
            return Some(Rejection::Empty);
        }
        if is_system_string(s) {
            return Some(Rejection::SystemString);
        }
        if self.config.matches_filtering_pattern(s) {
            return Some(Rejection::FilteringPattern);
        }
        if self.config.is_ignored_keyword(s) {
            return Some(Rejection::IgnoredKeyword);
        }
        if is_common_parameter_name(s) {
            return Some(Rejection::ParameterName);
        }
        if !self.heuristics.has_natural_language_characteristics(s) {
            return Some(Rejection::NotNaturalLanguage);
        }
        if !self.heuristics.is_valid_string_for_translation(s) {
            return Some(Rejection::NotTranslatable);
        }
        None
    }

    pub fn should_translate(&self, text: &str) -> bool {
        self.classify(text).is_none()
    }

    /// Filter candidates, returning the trimmed survivors in order.
    pub fn apply<I, S>(&self, strings: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        strings
            .into_iter()
            .filter_map(|candidate| {
                let s = candidate.as_ref().trim();
                match self.classify(s) {
                    Some(reason) => {
                        tracing::trace!(text = s, %reason, "rejected candidate");
                        None
                    }
                    None => Some(s.to_string()),
                }
            })
            .collect()
    }
}
