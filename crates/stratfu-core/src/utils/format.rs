use std::collections::HashSet;

/// Derive a URL-safe slug from a display name.
/// Lower-cases, removes whitespace, and strips everything outside `[a-z0-9-]`,
/// so accented characters disappear entirely ("Château" becomes "chteau").
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}

/// Parse the numeric value preceding the first `-` in a label, with
/// JavaScript `parseInt` semantics: leading whitespace skipped, optional `+`,
/// leading digits only. Returns NaN when no digits are present.
pub fn numeric_prefix(label: &str) -> f64 {
    let head = label.split('-').next().unwrap_or("").trim_start();
    let head = head.strip_prefix('+').unwrap_or(head);
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        f64::NAN
    } else {
        digits.parse().unwrap_or(f64::NAN)
    }
}

/// Remove duplicate entries, keeping the first occurrence of each string.
pub fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|s| seen.insert(s.as_str()))
        .cloned()
        .collect()
}

/// Case-insensitive substring check
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_strips_whitespace() {
        assert_eq!(slugify("Donjon des Bouftous"), "donjondesbouftous");
        assert_eq!(slugify("  Kanniboul  "), "kanniboul");
    }

    #[test]
    fn test_slugify_strips_non_ascii() {
        assert_eq!(slugify("Château d'Amakna"), "chteaudamakna");
        assert_eq!(slugify("Épreuve n°3"), "preuven3");
    }

    #[test]
    fn test_slugify_keeps_digits_and_hyphens() {
        assert_eq!(slugify("Tour 51-65"), "tour51-65");
    }

    #[test]
    fn test_numeric_prefix_parses_leading_digits() {
        assert_eq!(numeric_prefix("8 - 16"), 8.0);
        assert_eq!(numeric_prefix("51 - 65"), 51.0);
        assert_eq!(numeric_prefix(" 120 - 135"), 120.0);
        assert_eq!(numeric_prefix("12abc - 20"), 12.0);
    }

    #[test]
    fn test_numeric_prefix_nan_without_digits() {
        assert!(numeric_prefix("divers").is_nan());
        assert!(numeric_prefix("- 16").is_nan());
        assert!(numeric_prefix("").is_nan());
    }

    #[test]
    fn test_dedup_preserving_order() {
        let items = vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
            "b".to_string(),
        ];
        assert_eq!(dedup_preserving_order(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Donjon des Bouftous", "bouftou"));
        assert!(contains_ignore_case("Royalmouth", "MOUTH"));
        assert!(!contains_ignore_case("Royalmouth", "kralamoure"));
    }
}
