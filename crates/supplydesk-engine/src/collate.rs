use std::cmp::Ordering;

/// Human-oriented string ordering used for name sorts.
///
/// Letters compare case-insensitively first ("apple" < "Banana"); strings that
/// differ only by case put the lowercase form first ("acme" < "Acme").
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zeta Foods", "alpha dairy"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_first_on_case_tie() {
        assert_eq!(locale_cmp("acme", "Acme"), Ordering::Less);
        assert_eq!(locale_cmp("Acme", "acme"), Ordering::Greater);
        assert_eq!(locale_cmp("Acme", "Acme"), Ordering::Equal);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(locale_cmp("", "Acme"), Ordering::Less);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }
}
