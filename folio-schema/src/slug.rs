//! Slug normalization.

/// Normalizes `input` into a URL-safe slug of at most `max_length` characters.
///
/// Lowercases ASCII letters and collapses every run of other characters
/// (whitespace, punctuation, non-ASCII) into a single hyphen. Leading and
/// trailing hyphens are dropped, including any left behind by truncation.
pub fn slugify(input: &str, max_length: usize) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    // Only ASCII was pushed, so byte truncation lands on a char boundary.
    slug.truncate(max_length);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// True when `s` is non-empty and made only of unreserved URL characters.
///
/// This is the check applied to stored slugs. It is looser than [`slugify`]'s
/// output: `Folio_v2.1` passes here although `slugify` would produce
/// `folio-v2-1`.
pub fn is_url_safe(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_spaces_collapse() {
        assert_eq!(slugify("Hello, World! 2024", 96), "hello-world-2024");
    }

    #[test]
    fn truncation_drops_trailing_hyphen() {
        assert_eq!(slugify("abc def", 4), "abc");
    }

    #[test]
    fn non_ascii_is_a_separator() {
        assert_eq!(slugify("Café  Crème", 96), "caf-cr-me");
    }

    #[test]
    fn only_punctuation_yields_empty() {
        assert_eq!(slugify("!!! ---", 96), "");
    }

    #[test]
    fn url_safe_rejects_spaces_and_empty() {
        assert!(is_url_safe("my-project_v2.1~x"));
        assert!(!is_url_safe("my project"));
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("a/b"));
    }

    #[test]
    fn url_safe_accepts_unnormalized_slugs() {
        assert!(is_url_safe("Folio_v2.1"));
        assert_eq!(slugify("Folio_v2.1", 96), "folio-v2-1");
    }
}
