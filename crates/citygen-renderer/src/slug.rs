//! URL slug normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters that cannot appear in a slug.
static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("invalid slug regex"));

/// Normalize free text into a lowercase, hyphen-separated URL segment.
///
/// `&` is spelled out as `and`, every run of characters outside `[a-z0-9]`
/// becomes a single hyphen, and hyphens at either end are stripped.
///
/// # Examples
///
/// ```
/// use citygen_renderer::slugify;
///
/// assert_eq!(slugify("  Los Angeles "), "los-angeles");
/// assert_eq!(slugify("Fort Worth & Dallas"), "fort-worth-and-dallas");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase().replace('&', " and ");
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_owned()
}

/// Slug for a city page: `{city}-{state}`.
///
/// # Examples
///
/// ```
/// use citygen_renderer::city_state_slug;
///
/// assert_eq!(city_state_slug("San Antonio", "TX"), "san-antonio-tx");
/// ```
pub fn city_state_slug(city: &str, state: &str) -> String {
    format!("{}-{}", slugify(city), slugify(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_clean_slug(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("New York"), "new-york");
        assert_eq!(slugify("Washington"), "washington");
    }

    #[test]
    fn test_slugify_trims_whitespace() {
        assert_eq!(slugify("\t San Jose \n"), "san-jose");
    }

    #[test]
    fn test_slugify_replaces_ampersand() {
        assert_eq!(slugify("Pest & Wasp"), "pest-and-wasp");
        assert_eq!(slugify("A&B"), "a-and-b");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("St. Louis -- (MO)"), "st-louis-mo");
        assert_eq!(slugify("a___b"), "a-b");
    }

    #[test]
    fn test_slugify_strips_edge_hyphens() {
        assert_eq!(slugify("--Austin--"), "austin");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_slugify_non_ascii_letters_become_separators() {
        assert_eq!(slugify("Cañon City"), "ca-on-city");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("District 9"), "district-9");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let inputs = [
            "Los Angeles",
            "  Fort Worth & Dallas ",
            "St. Louis -- (MO)",
            "Cañon City",
            "---",
            "",
            "already-a-slug",
            "ÜBER Straße 42",
            "a & & b",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
            assert!(is_clean_slug(&once), "unclean slug {once:?} for {input:?}");
        }
    }

    #[test]
    fn test_city_state_slug() {
        assert_eq!(city_state_slug("Austin", "TX"), "austin-tx");
        assert_eq!(city_state_slug("Washington", "DC"), "washington-dc");
        assert_eq!(city_state_slug("Los Angeles", "CA"), "los-angeles-ca");
    }
}
