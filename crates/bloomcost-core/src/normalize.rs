//! Column-label canonicalization
//!
//! Raw sheets arrive with labels like `"COSTO\n TOTAL"` or `"PRICE \nCLIENTE"`.
//! Every downstream lookup happens against the canonical form, so
//! normalization runs exactly once, right after header promotion.

/// Canonicalize a raw column label.
///
/// Whitespace runs (including newlines) collapse to a single space, the
/// result is trimmed, upper-cased, and spaces become underscores.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
        .replace(' ', "_")
}

/// Canonicalize a sequence of raw column labels, preserving order and count.
pub fn normalize_labels<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|s| normalize_label(s.as_ref())).collect()
}
