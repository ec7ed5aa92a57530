//! Locext - translatable string extraction for Swift projects
//!
//! Locext scans Swift source files and Interface Builder files (`.storyboard`,
//! `.xib`) for string literals and keeps the ones that look like user-facing
//! text. System identifiers, API parameter names, resource references and
//! other non-natural-language tokens are filtered out.
//!
//! ```
//! use locext::{FileKind, Language, PatternRegistry, StringExtractor, extractor_for};
//!
//! let extractor = extractor_for(Language::Swift, &PatternRegistry::builtin()).unwrap();
//! let strings = extractor.extract_strings(
//!     r#"Text("Welcome back") Image(systemName: "star")"#,
//!     FileKind::Code,
//! );
//! assert_eq!(strings, vec!["Welcome back"]);
//! ```
//!
//! ## Module Structure
//!
//! - `config`: Pattern registry loading and validation
//! - `core`: Matching and filtering pipeline
//! - `utils`: Shared utility functions

pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{LanguagePatterns, PatternRegistry, RuleDef, load_registry};
pub use crate::core::{Extractor, FileKind, Language, StringExtractor, extractor_for};
