//! Text normalization applied before any keyword matching.

/// Normalizes raw user text for matching.
///
/// Trims, lower-cases, folds typographic apostrophes to `'` and collapses
/// whitespace runs to a single space. Total over all inputs.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '\u{02BC}' | '`' => '\'',
            other => other,
        })
        .collect();

    folded
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
