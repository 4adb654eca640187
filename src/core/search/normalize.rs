//! German orthographic query variants.
//!
//! Sellers write "Gärten", "Gaerten" or "GAERTEN" for the same
//! thing. A query is expanded into at most three variants (the
//! original, an all-digraph form and an all-umlaut form) which are
//! all scored against every listing.
//!
//! Both substitution tables are applied in a single left-to-right
//! pass over the original string; output is never re-scanned.

/// Digraph to umlaut substitutions, checked in order at each position
const ASCII_TO_UMLAUT: &[(&str, &str)] = &[
    ("ae", "ä"),
    ("oe", "ö"),
    ("ue", "ü"),
    ("ss", "ß"),
    ("AE", "Ä"),
    ("OE", "Ö"),
    ("UE", "Ü"),
    ("Ae", "Ä"),
    ("Oe", "Ö"),
    ("Ue", "Ü"),
];

/// Umlaut to digraph substitutions
const UMLAUT_TO_ASCII: &[(&str, &str)] = &[
    ("ä", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("ß", "ss"),
    ("Ä", "AE"),
    ("Ö", "OE"),
    ("Ü", "UE"),
];

/// Expand a query into its orthographic variants.
///
/// The original query is always the first element. Duplicates
/// collapse, and variants that are blank after trimming are dropped,
/// so a blank query yields no variants at all.
///
/// # Examples
///
/// ```
/// use plotmarket::core::search::normalize;
///
/// let variants = normalize("Gärten");
/// assert!(variants.contains(&"Gärten".to_string()));
/// assert!(variants.contains(&"Gaerten".to_string()));
///
/// assert_eq!(normalize("Garten"), vec!["Garten".to_string()]);
/// assert!(normalize("   ").is_empty());
/// ```
pub fn normalize(query: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::with_capacity(3);

    for candidate in [
        query.to_string(),
        substitute(query, UMLAUT_TO_ASCII),
        substitute(query, ASCII_TO_UMLAUT),
    ] {
        if candidate.trim().is_empty() || variants.contains(&candidate) {
            continue;
        }
        variants.push(candidate);
    }

    variants
}

/// Single pass over `input`, replacing the first table pattern that
/// matches at each position.
fn substitute(input: &str, table: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut rest = input;

    'outer: while !rest.is_empty() {
        for (pattern, replacement) in table {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }

        // No pattern here, copy one char through
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}
