//! Utility functions for string processing.

/// Fold a string for case-insensitive comparison.
///
/// Only case is folded. Whitespace, punctuation and diacritics are significant,
/// so `"Zero Knowledge"` and `"zero  knowledge"` stay distinct aliases.
///
/// - "ZKP" → "zkp"
/// - "Ethereum Name Service" → "ethereum name service"
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Count the entries of `haystack` that mention `id` at least once.
///
/// A record listing the same identifier twice still counts once.
pub fn count_mentions<'a, T: 'a>(
    haystack: impl IntoIterator<Item = &'a T>,
    id: &str,
    members: impl Fn(&'a T) -> &'a [String],
) -> usize {
    haystack
        .into_iter()
        .filter(|record| members(*record).iter().any(|m| m == id))
        .count()
}
