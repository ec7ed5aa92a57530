//! Pattern matching phase.
//!
//! Applies a [`PatternGroup`] to raw file text and sorts the captured literals
//! into the general and UI-labeled buckets. Nothing is deduplicated here: a
//! literal that appears three times yields three entries.

use regex::Regex;

use crate::core::types::{FileKind, MatchBuckets, PatternGroup};

/// Collect every match of `regex` in `content`.
///
/// Uses capture group 1 when the rule defines one (an optional group that did
/// not participate yields an empty string), the whole match otherwise.
fn find_all(regex: &Regex, content: &str) -> Vec<String> {
    if regex.captures_len() > 1 {
        regex
            .captures_iter(content)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string())
            .collect()
    } else {
        regex
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

pub fn match_patterns(content: &str, kind: FileKind, group: &PatternGroup) -> MatchBuckets {
    let mut buckets = MatchBuckets::default();

    if kind.is_markup() {
        for rule in &group.ui_patterns {
            buckets.general.extend(find_all(&rule.regex, content));
        }
        return buckets;
    }

    for rule in &group.code_patterns {
        let matches = find_all(&rule.regex, content);
        if rule.is_text_component() {
            buckets.ui_labeled.extend(matches);
        } else {
            buckets.general.extend(matches);
        }
    }

    buckets
}
