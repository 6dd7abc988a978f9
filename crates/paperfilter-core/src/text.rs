//! Word-boundary containment helpers.
//!
//! A "standalone" occurrence is one where both ends of the match are adjacent
//! to a non-alphanumeric character or the string edge. This is deliberately
//! not regex `\b`: underscore counts as a boundary here, and the alphanumeric
//! test is Unicode-aware via [`char::is_alphanumeric`].

fn is_boundary(c: Option<char>) -> bool {
    c.is_none_or(|c| !c.is_alphanumeric())
}

/// Case-sensitive standalone-word containment.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    for (pos, matched) in haystack.match_indices(needle) {
        let before = haystack[..pos].chars().next_back();
        let after = haystack[pos + matched.len()..].chars().next();
        if is_boundary(before) && is_boundary(after) {
            return true;
        }
    }
    false
}

/// Case-insensitive standalone-word containment.
pub fn contains_word_ci(haystack: &str, needle: &str) -> bool {
    contains_word(&haystack.to_lowercase(), &needle.to_lowercase())
}

/// Case-insensitive substring containment (no boundary requirement).
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
