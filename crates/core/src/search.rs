//! Search helpers shared by the SQL and in-memory stores.

/// Escape character used in generated `LIKE` / `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` substring pattern that matches `term` literally.
///
/// `%`, `_` and the escape character itself are escaped so user input can't
/// widen the match. Use with `ESCAPE '\'`.
///
/// # Examples
///
/// ```
/// use burnerhub_core::search::like_pattern;
/// assert_eq!(like_pattern("pro"), "%pro%");
/// assert_eq!(like_pattern("50%"), "%50\\%%");
/// assert_eq!(like_pattern("a_b"), "%a\\_b%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out.push('%');
    out
}
