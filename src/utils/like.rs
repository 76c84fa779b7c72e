//! LIKE pattern construction for substring search.
//!
//! Search input is user-controlled, so LIKE metacharacters in it must match
//! literally rather than act as wildcards.

/// Builds an unanchored `LIKE` pattern matching rows that contain `query`
/// as a literal substring.
///
/// Escapes `\`, `%`, and `_` (PostgreSQL's default escape character and the
/// two wildcards) before wrapping the query in `%...%`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(contains_pattern("1011"), "%1011%");
/// assert_eq!(contains_pattern("50%"), "%50\\%%");
/// ```
pub fn contains_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}
