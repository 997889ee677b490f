/// Maximum length of a repository name derived from a project name.
pub const MAX_REPO_NAME_LEN: usize = 100;

/// Derive a repository name from a free-form project name.
///
/// Lengths count UTF-16 code units. Every unit outside `[A-Za-z0-9_.-]`
/// becomes `-`, so a character beyond the Basic Multilingual Plane (most
/// emoji) turns into `--`. The result is cut to [`MAX_REPO_NAME_LEN`] units.
/// Empty input yields an empty name.
pub fn sanitize_repo_name(name: &str) -> String {
    name.chars()
        .flat_map(|ch| {
            let (kept, units) = if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-') {
                (ch, 1)
            } else {
                ('-', ch.len_utf16())
            };
            std::iter::repeat(kept).take(units)
        })
        .take(MAX_REPO_NAME_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_disallowed_characters() {
        assert_eq!(sanitize_repo_name("My Proj!!"), "My-Proj--");
        assert_eq!(sanitize_repo_name("a_b.c-d"), "a_b.c-d");
    }

    #[test]
    fn truncates_to_limit() {
        let long = "a".repeat(150);
        assert_eq!(sanitize_repo_name(&long), "a".repeat(100));
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize_repo_name(""), "");
    }

    #[test]
    fn non_ascii_maps_per_utf16_unit() {
        assert_eq!(sanitize_repo_name("café"), "caf-");
        assert_eq!(sanitize_repo_name("Hi 🚀"), "Hi---");
    }

    #[test]
    fn astral_characters_count_twice_toward_limit() {
        let name = format!("{}🚀z", "a".repeat(99));
        let sanitized = sanitize_repo_name(&name);
        assert_eq!(sanitized.len(), MAX_REPO_NAME_LEN);
        assert_eq!(sanitized, format!("{}-", "a".repeat(99)));
    }
}
