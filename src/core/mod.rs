//! Core extraction engine.
//!
//! Extraction runs in two phases:
//!
//! 1. **Matching**: registry regexes are applied to the file text, producing a
//!    general bucket and a UI-labeled bucket (`matcher`).
//! 2. **Filtering**: the general bucket goes through the language-independent
//!    basic filter (`heuristics`), UI-labeled strings are appended, and the
//!    language filter chain decides what remains (`swift`).
//!
//! ## Module Structure
//!
//! - `types`: Pattern groups, filter configuration and file kinds
//! - `matcher`: Pattern matching phase
//! - `heuristics`: Shared base extraction contract and its default implementation
//! - `registry`: Extractor trait and dispatch by language
//! - `swift`: Swift-specific catalog, filter chain and extractor

pub mod heuristics;
pub mod matcher;
pub mod registry;
pub mod swift;
pub mod types;

pub use heuristics::{BaseExtraction, DefaultHeuristics};
pub use matcher::match_patterns;
pub use registry::{Extractor, Language, StringExtractor, extractor_for};
pub use types::{FileKind, FilterConfig, MatchBuckets, PatternGroup, PatternRule};
