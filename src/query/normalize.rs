//! Name normalization shared by the name index and name lookups

/// Normalize a display name into a lookup key.
///
/// Surrounding whitespace is trimmed and the text is lower-cased. Inner
/// whitespace is left alone, so "Pat  Lee" and "Pat Lee" stay distinct.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
