//! Swift and Interface Builder string extraction.
//!
//! ## Module Structure
//!
//! - `catalog`: System call shapes and parameter names that are never display text
//! - `filter`: The Swift filter chain applied after pattern matching
//! - `extractor`: The full extraction pipeline for one file

pub mod catalog;
pub mod extractor;
pub mod filter;

pub use extractor::SwiftExtractor;
pub use filter::{Rejection, SwiftFilter};
