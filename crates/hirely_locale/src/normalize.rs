/// Normalize culture codes to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (some backends report `de_DE`).
/// - Trims whitespace.
pub fn normalize_culture(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Create a fallback chain for culture matching.
///
/// Example:
/// - `de-DE` -> `["de-DE", "de"]`
/// - `de` -> `["de"]` (deduped)
pub fn culture_fallback_chain(culture: &str) -> Vec<String> {
    let c = normalize_culture(culture);
    let mut chain = Vec::new();

    if !c.is_empty() {
        chain.push(c.clone());
        if let Some(lang) = c.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    // Dedup, preserve order.
    let mut out = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for x in chain {
        if seen.insert(x.clone()) {
            out.push(x);
        }
    }
    out
}
