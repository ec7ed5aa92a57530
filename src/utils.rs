//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use locext::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("你好"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Checks if the text is an unsigned decimal number such as `42` or `3.14`.
pub fn is_numeric_literal(text: &str) -> bool {
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(text),
    }
}
