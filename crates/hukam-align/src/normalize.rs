// Whitespace canonicalization for raw page text.
//
// Raw blobs arrive with `&nbsp;` entities, literal no-break spaces,
// and arbitrary runs of whitespace from HTML extraction. Everything
// downstream assumes single-spaced, trimmed text.

/// Collapse a raw blob into a canonical single-spaced string.
///
/// Replaces `&nbsp;` entities with ordinary spaces, collapses any run
/// of whitespace (including U+00A0) to a single space, and trims.
/// Total and idempotent.
pub fn normalize(raw: &str) -> String {
    raw.replace("&nbsp;", " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
