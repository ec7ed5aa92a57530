//! Pattern registry loading and validation.
//!
//! The registry is a JSON object keyed by language identifier. Each entry
//! carries the regex rules used to discover string literals and the rules used
//! to discard the ones that are not worth translating:
//!
//! ```json
//! {
//!   "swift": {
//!     "ui_patterns": [{ "name": "ib_text", "pattern": "text=\"([^\"]*)\"" }],
//!     "code_patterns": [{ "name": "text_component", "pattern": "Text\\(\"([^\"]*)\"\\)" }],
//!     "filtering_patterns": ["^https?://"],
//!     "keywords_to_ignore": ["true", "false"]
//!   }
//! }
//! ```

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::types::{FilterConfig, PatternGroup, PatternRule, TEXT_COMPONENT_TAG};

/// A named regex rule as written in the registry file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleDef {
    #[serde(default)]
    pub name: String,
    pub pattern: String,
}

impl RuleDef {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Extraction and filtering rules for one source language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguagePatterns {
    /// Applied to Interface Builder files (`.storyboard`, `.xib`).
    #[serde(default)]
    pub ui_patterns: Vec<RuleDef>,
    /// Applied to source files, in declared order.
    #[serde(default)]
    pub code_patterns: Vec<RuleDef>,
    #[serde(default)]
    pub filtering_patterns: Vec<String>,
    #[serde(default)]
    pub keywords_to_ignore: Vec<String>,
}

fn compile_rule(field: &str, rule: &RuleDef) -> Result<PatternRule> {
    let regex = Regex::new(&rule.pattern).with_context(|| {
        format!(
            "Invalid regex in '{}' (rule \"{}\"): \"{}\"",
            field, rule.name, rule.pattern
        )
    })?;
    Ok(PatternRule::new(&rule.name, regex))
}

impl LanguagePatterns {
    /// Validate configuration values.
    ///
    /// Returns an error if any regex in the entry fails to compile.
    pub fn validate(&self) -> Result<()> {
        self.compile().map(|_| ())
    }

    /// Compile every rule into the matcher and filter inputs.
    pub fn compile(&self) -> Result<(PatternGroup, FilterConfig)> {
        let ui_patterns = self
            .ui_patterns
            .iter()
            .map(|rule| compile_rule("ui_patterns", rule))
            .collect::<Result<Vec<_>>>()?;
        let code_patterns = self
            .code_patterns
            .iter()
            .map(|rule| compile_rule("code_patterns", rule))
            .collect::<Result<Vec<_>>>()?;
        let filtering_patterns = self
            .filtering_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).with_context(|| {
                    format!("Invalid regex in 'filtering_patterns': \"{}\"", pattern)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((
            PatternGroup {
                ui_patterns,
                code_patterns,
            },
            FilterConfig {
                filtering_patterns,
                keywords_to_ignore: self.keywords_to_ignore.iter().cloned().collect(),
            },
        ))
    }
}

/// Language-keyed table of pattern entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PatternRegistry {
    languages: HashMap<String, LanguagePatterns>,
}

impl PatternRegistry {
    /// Parse and validate a registry document.
    pub fn from_json(content: &str) -> Result<Self> {
        let registry: Self =
            serde_json::from_str(content).context("Failed to parse pattern registry.")?;
        registry.validate()?;
        Ok(registry)
    }

    /// The registry bundled with the crate.
    pub fn builtin() -> Self {
        let mut languages = HashMap::new();
        languages.insert("swift".to_string(), builtin_swift_patterns());
        Self { languages }
    }

    pub fn get(&self, language: &str) -> Option<&LanguagePatterns> {
        self.languages.get(language)
    }

    pub fn insert(&mut self, language: &str, patterns: LanguagePatterns) {
        self.languages.insert(language.to_string(), patterns);
    }

    pub fn validate(&self) -> Result<()> {
        for (language, patterns) in &self.languages {
            patterns
                .validate()
                .with_context(|| format!("Invalid patterns for language \"{}\"", language))?;
        }
        Ok(())
    }
}

/// Read a registry from a JSON file.
pub fn load_registry(path: &Path) -> Result<PatternRegistry> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern registry: {:?}", path))?;
    PatternRegistry::from_json(&content)
        .with_context(|| format!("Failed to load pattern registry: {:?}", path))
}

pub fn default_registry_json() -> Result<String> {
    serde_json::to_string_pretty(&PatternRegistry::builtin())
        .context("Failed to generate default pattern registry.")
}

// Literal body with escaped characters, e.g. `Hello \"world\"`.
const LITERAL: &str = r#"(?:[^"\\\n]|\\.)*"#;

fn builtin_swift_patterns() -> LanguagePatterns {
    let rule = |name: &str, pattern: String| RuleDef::new(name, &pattern);

    // Rules wrapped in a single outer group capture the whole call so that
    // the system string catalog can recognise and drop it.
    let code_patterns = vec![
        rule(
            TEXT_COMPONENT_TAG,
            format!(r#"\bText\(\s*"({LITERAL})"\s*\)"#),
        ),
        rule("button_label", format!(r#"\b(Button\("{LITERAL}"\))"#)),
        rule(
            "toggle_label",
            format!(r#"\b(Toggle\("{LITERAL}", isOn:[^)\n]*\))"#),
        ),
        rule(
            "field_label",
            format!(r#"\b((?:Text|Secure)Field\("{LITERAL}", text:[^)\n]*\))"#),
        ),
        rule(
            "picker_label",
            format!(r#"\b((?:Date)?Picker\("{LITERAL}", selection:[^)\n]*\))"#),
        ),
        rule(
            "navigation_title",
            format!(r#"(\.navigation(?:Bar)?Title\("{LITERAL}"\))"#),
        ),
        rule(
            "alert_title",
            format!(r#"(\.alert\("{LITERAL}", isPresented:[^)\n]*\))"#),
        ),
        rule(
            "system_image",
            r#"\b((?:UI)?Image\(systemName:\s*"[^"\n]*"\))"#.to_string(),
        ),
        rule(
            "localized_string",
            format!(r#"\b(NSLocalizedString\("{LITERAL}"[^)\n]*\))"#),
        ),
        rule(
            "string_assignment",
            format!(r#"\b(?:let|var)\s+\w+\s*(?::\s*String\s*)?=\s*"({LITERAL})""#),
        ),
        rule(
            "labeled_argument",
            format!(r#"\b(?:title|message|placeholder|prompt|label):\s*"({LITERAL})""#),
        ),
    ];

    let ui_patterns = vec![
        RuleDef::new("ib_text", r#"\btext="([^"]*)""#),
        RuleDef::new("ib_title", r#"\btitle="([^"]*)""#),
        RuleDef::new("ib_placeholder", r#"\bplaceholder="([^"]*)""#),
    ];

    let filtering_patterns = [
        r"^https?://",
        r"^[a-z][a-z0-9]*(\.[a-z][a-z0-9]*)+$",
        r"^%[0-9.]*[@dfsl]+$",
        r"\\\(",
    ]
    .map(String::from)
    .to_vec();

    let keywords_to_ignore = ["true", "false", "nil", "self", "default", "none", "main"]
        .map(String::from)
        .to_vec();

    LanguagePatterns {
        ui_patterns,
        code_patterns,
        filtering_patterns,
        keywords_to_ignore,
    }
}
