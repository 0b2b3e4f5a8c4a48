//! Species name normalization
//!
//! Grouping keys must be normalized identically everywhere so that rows for
//! the same species always land in the same group regardless of how the
//! species cell was capitalized or padded in the input file.

/// Normalize a raw species cell into a grouping key
///
/// Trims surrounding whitespace and capitalizes: first character uppercase,
/// remainder lowercase. Returns an empty string for an empty or
/// whitespace-only cell, which the loader treats as an unusable row.
pub fn normalize_species(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => {
            let mut normalized: String = first.to_uppercase().collect();
            normalized.extend(chars.flat_map(char::to_lowercase));
            normalized
        }
        None => String::new(),
    }
}
