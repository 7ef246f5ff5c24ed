use semver::Version;

/// Parse a release tag into a semver::Version, normalizing common tag forms.
///
/// Strips one leading 'v' or 'V' and pads partial versions with zeros.
/// Returns None for anything that still is not a valid semantic version.
///
/// Examples:
/// - "v1.2.3" -> Version(1, 2, 3)
/// - "1.2" -> Version(1, 2, 0)
/// - "2" -> Version(2, 0, 0)
pub fn parse_release_tag(tag: &str) -> Option<Version> {
    let trimmed = tag.trim();
    let version = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Normalize raw release tags into versions, dropping tags that do not
/// parse. Order is preserved.
pub fn normalize_release_tags(tags: &[String]) -> Vec<Version> {
    tags.iter()
        .filter_map(|tag| parse_release_tag(tag))
        .collect()
}
