//! Swift extraction pipeline for a single file.

use anyhow::Result;

use crate::config::LanguagePatterns;
use crate::core::heuristics::{BaseExtraction, DefaultHeuristics};
use crate::core::matcher::match_patterns;
use crate::core::registry::{Language, StringExtractor};
use crate::core::swift::filter::SwiftFilter;
use crate::core::types::{FileKind, FilterConfig, PatternGroup};

/// Extracts translatable strings from Swift sources and Interface Builder files.
///
/// Pipeline: pattern matching, basic filtering of the general bucket, merge
/// with the UI-labeled bucket, then the Swift filter chain. UI-labeled strings
/// skip basic filtering but still go through every Swift gate.
#[derive(Debug, Clone)]
pub struct SwiftExtractor<H = DefaultHeuristics> {
    group: PatternGroup,
    filter: SwiftFilter<H>,
}

impl SwiftExtractor {
    pub fn new(group: PatternGroup, config: FilterConfig) -> Self {
        Self::with_heuristics(group, config, DefaultHeuristics)
    }

    /// Build from a registry entry, compiling its regexes.
    pub fn from_patterns(patterns: &LanguagePatterns) -> Result<Self> {
        let (group, config) = patterns.compile()?;
        Ok(Self::new(group, config))
    }
}

impl<H: BaseExtraction> SwiftExtractor<H> {
    pub fn with_heuristics(group: PatternGroup, config: FilterConfig, heuristics: H) -> Self {
        Self {
            group,
            filter: SwiftFilter::with_heuristics(config, heuristics),
        }
    }

    pub fn filter(&self) -> &SwiftFilter<H> {
        &self.filter
    }
}

impl<H: BaseExtraction> StringExtractor for SwiftExtractor<H> {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn extract_strings(&self, content: &str, kind: FileKind) -> Vec<String> {
        let buckets = match_patterns(content, kind, &self.group);
        tracing::debug!(
            ?kind,
            general = buckets.general.len(),
            ui_labeled = buckets.ui_labeled.len(),
            "matched candidate strings"
        );

        let mut candidates = self.filter.heuristics().filter_strings(buckets.general);
        candidates.extend(buckets.ui_labeled);

        let kept = self.filter.apply(candidates);
        tracing::debug!(kept = kept.len(), "filtered candidate strings");
        kept
    }
}
