// crates/rucities-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Москва` -> `Moskva`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use rucities_core::text::fold_key;
///
/// assert_eq!(fold_key("Москва"), "moskva");
/// assert_eq!(fold_key("ОМСК"), "omsk");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}
