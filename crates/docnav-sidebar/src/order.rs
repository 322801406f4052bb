//! Sidebar entry ordering.

use std::cmp::Ordering;

/// Compare two sidebar entries, numerically when both are integers.
///
/// Entries that parse entirely as integers compare by value, so `"10"`
/// sorts after `"2"`. Non-numeric entries compare as strings among
/// themselves. A numeric entry always orders before a non-numeric one, so
/// the relation is a total order and safe to hand to `sort_by` even when a
/// directory mixes lesson numbers with named pages. The comparison is
/// explicit about which branch applies: `"0"` is a valid integer and
/// participates in numeric ordering.
#[must_use]
pub fn compare_entries(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_numeric_compares_by_value() {
        assert_eq!(compare_entries("2", "10"), Ordering::Less);
        assert_eq!(compare_entries("10", "2"), Ordering::Greater);
        assert_eq!(compare_entries("3", "3"), Ordering::Equal);
    }

    #[test]
    fn test_zero_is_numeric() {
        // "0" must hit the numeric branch, not fall back to strings.
        assert_eq!(compare_entries("0", "2"), Ordering::Less);
        assert_eq!(compare_entries("00", "0"), Ordering::Equal);
    }

    #[test]
    fn test_non_numeric_compares_as_strings() {
        assert_eq!(compare_entries("LinuxInstall", "MacInstall"), Ordering::Less);
        assert_eq!(
            compare_entries("WindowsInstall", "MacInstall"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_numeric_orders_before_non_numeric() {
        assert_eq!(compare_entries("10", "glossary"), Ordering::Less);
        assert_eq!(compare_entries("glossary", "10"), Ordering::Greater);
        // Also when the string side starts with digits and would win a
        // byte-wise comparison.
        assert_eq!(compare_entries("5", "1x"), Ordering::Less);
        assert_eq!(compare_entries("1x", "5"), Ordering::Greater);
    }

    #[test]
    fn test_sort_is_total() {
        let mut entries = vec!["10", "glossary", "2", "1", "appendix"];
        entries.sort_by(|a, b| compare_entries(a, b));
        assert_eq!(entries, vec!["1", "2", "10", "appendix", "glossary"]);
    }

    #[test]
    fn test_large_mixed_sort_does_not_panic() {
        // Numbers interleaved with digit-prefixed names form comparison
        // cycles under a naive both-numeric-else-string comparator, which
        // std's sort rejects with a panic on inputs this size. The tagged
        // ordering must stay consistent.
        let mut entries: Vec<String> = (1..=40).map(|n| n.to_string()).collect();
        entries.extend((1..=20).map(|n| format!("{n}x")));

        entries.sort_by(|a, b| compare_entries(a, b));

        let expected_numbers: Vec<String> = (1..=40).map(|n| n.to_string()).collect();
        assert_eq!(entries[..40], expected_numbers);

        let mut expected_names: Vec<String> = (1..=20).map(|n| format!("{n}x")).collect();
        expected_names.sort();
        assert_eq!(entries[40..], expected_names);
    }
}
