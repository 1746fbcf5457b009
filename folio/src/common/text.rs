/// Folds a string for case-insensitive comparison.
///
/// Every ordering and matching decision in the index goes through this
/// function, so titles that differ only in case compare equal.
#[inline]
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true if `haystack` contains the already folded `folded_needle`.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    if folded_needle.is_empty() {
        return true;
    }
    fold(haystack).contains(folded_needle)
}

/// Returns true if `haystack` starts with the already folded `folded_prefix`.
#[inline]
pub fn starts_with_folded(haystack: &str, folded_prefix: &str) -> bool {
    if folded_prefix.is_empty() {
        return true;
    }
    fold(haystack).starts_with(folded_prefix)
}
