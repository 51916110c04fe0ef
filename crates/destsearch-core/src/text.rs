// crates/destsearch-core/src/text.rs

//! Text helpers shared by matching, path derivation and fallback routing.

/// Lowercase a string for case-insensitive comparison.
///
/// This is plain Unicode lowercasing, no transliteration: `"Zürich"` becomes
/// `"zürich"`.
#[inline]
pub fn lower_key(s: &str) -> String {
    s.to_lowercase()
}

/// Convert a string into a folded key suitable for accent-insensitive matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use destsearch_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Build a URL path segment from a display name.
///
/// Transliterates to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single `-`.
///
/// ```rust
/// use destsearch_core::text::slugify;
///
/// assert_eq!(slugify("São Paulo"), "sao-paulo");
/// assert_eq!(slugify("  Washington, D.C. "), "washington-d-c");
/// ```
pub fn slugify(s: &str) -> String {
    let ascii = deunicode::deunicode(s);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Percent-encode a raw query for use as a URL query value.
///
/// Uses `application/x-www-form-urlencoded` rules (spaces become `+`).
pub fn encode_query_value(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
