//! Location normalization
//!
//! Data sources write locations as free text with the canonical form in
//! parentheses, e.g. `"Fort Base (34.05,-118.25)"`. Everything downstream
//! (map queries, route labels) goes through [`canonical_location`].

/// Extract the canonical form of a free-text location.
///
/// Returns the text between the first `(` and the first `)` after it. Without
/// a `(`, or without a closing `)` after it, the input is returned unchanged.
/// `"Base ()"` yields an empty string.
pub fn canonical_location(raw: &str) -> &str {
    let Some(open) = raw.find('(') else {
        return raw;
    };
    let inner = &raw[open + 1..];
    match inner.find(')') {
        Some(close) => &inner[..close],
        None => raw,
    }
}

/// Whether a canonical location carries no usable place data
pub fn is_degraded(canonical: &str) -> bool {
    canonical.trim().is_empty()
}

/// Route label shown next to a convoy in the tracking list
pub fn route_label(start_location: &str, destination: &str) -> String {
    format!(
        "{} → {}",
        canonical_location(start_location),
        canonical_location(destination)
    )
}
