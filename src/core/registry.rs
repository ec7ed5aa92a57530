//! Extractor dispatch by language.
//!
//! Each supported language has one extractor type implementing
//! [`StringExtractor`]. [`Extractor`] wraps them in an enum so callers can
//! dispatch on a language identifier without trait objects.

use std::{fmt, fs, path::Path, str::FromStr};

use anyhow::{Context, Result, anyhow, bail};
use enum_dispatch::enum_dispatch;

use crate::config::PatternRegistry;
use crate::core::swift::SwiftExtractor;
use crate::core::types::FileKind;

/// Source languages with an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Swift,
}

impl Language {
    pub const ALL: &'static [Language] = &[Language::Swift];

    /// Key used in the pattern registry.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Swift => "swift",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unsupported language: \"{}\"", s))
    }
}

/// Common contract for per-language extractors.
///
/// Extraction itself is pure; only reading a file can fail.
#[enum_dispatch]
pub trait StringExtractor {
    fn language(&self) -> Language;

    /// Extract translatable strings from file text, in output order.
    fn extract_strings(&self, content: &str, kind: FileKind) -> Vec<String>;

    /// Read a UTF-8 file and extract from it, choosing the ruleset by extension.
    fn extract_file(&self, path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;
        Ok(self.extract_strings(&content, FileKind::from_path(path)))
    }
}

#[enum_dispatch(StringExtractor)]
#[derive(Debug, Clone)]
pub enum Extractor {
    Swift(SwiftExtractor),
}

/// Build the extractor for `language` from its registry entry.
pub fn extractor_for(language: Language, registry: &PatternRegistry) -> Result<Extractor> {
    let Some(patterns) = registry.get(language.as_str()) else {
        bail!("No patterns registered for language \"{}\"", language);
    };
    let extractor: Extractor = match language {
        Language::Swift => SwiftExtractor::from_patterns(patterns)?.into(),
    };
    Ok(extractor)
}
