//! Word counting over a text field value
//!
//! The algorithm is a fixed three-step pipeline:
//! 1. Normalize: replace each separator character with one space (1:1, runs
//!    are not collapsed).
//! 2. Split the normalized text on the single-space character.
//! 3. Trim each token and count the ones that are non-empty.
//!
//! The sequence is deliberate: double spaces produce empty tokens that are
//! filtered in step 3, not merged in step 2, and the counts differ if the
//! steps are reordered or fused.

/// Characters that act as word boundaries and are replaced by a space
/// during normalization.
pub const SEPARATORS: &[char] = &['\t', '\n', '\r', '.', '?', '!'];

/// Replace every separator character with a single space.
///
/// Replacement is one-for-one; consecutive separators yield consecutive
/// spaces.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect()
}

/// Count the words in `raw`.
///
/// Deterministic in `raw` alone; calling it twice on the same string gives
/// the same count.
pub fn count_words(raw: &str) -> usize {
    normalize(raw)
        .split(' ')
        .filter(|token| !token.trim().is_empty())
        .count()
}

/// The trimmed, non-empty tokens of `raw`, in order.
pub fn words(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
