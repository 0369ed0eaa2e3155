// src/core/sanitize.rs

/// Cell text as displayed: surrounding whitespace (incl. decoded `&nbsp;`) removed, inner text untouched.
pub fn clean(s: &str) -> String {
    s.trim().to_string()
}

/// Normalized form for identifiers and searchable text.
pub fn upper(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Split a comma-separated list, dropping empty pieces. Used for RIF/keyword/chat lists.
pub fn split_list(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty())
}
