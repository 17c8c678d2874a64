/// Canonical form of a user-supplied table key: surrounding whitespace
/// removed, then lowercased.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `true` when `query` names `canonical` or one of its aliases.
pub(crate) fn key_matches(query: &str, canonical: &str, aliases: &[&str]) -> bool {
    normalize_key(canonical) == query || aliases.iter().any(|alias| normalize_key(alias) == query)
}
