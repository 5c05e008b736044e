//! Line normalization.

/// Split raw text into lowercased, trimmed, non-empty lines.
///
/// Accepts both `\n` and `\r\n` line endings. Empty input yields no lines.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect()
}
