/// Lookup key for a person's name. Only letter case is folded; spacing and
/// punctuation must match the stored name exactly.
pub fn normalize_name(input: &str) -> String {
    input.to_lowercase()
}
