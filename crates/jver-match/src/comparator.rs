//! Version-id comparison (JSR 56 Prefix Match and Exact Match)

use std::cmp::Ordering;

/// Characters that delimit the components of a version-id.
pub const SEPARATORS: &[char] = &['.', '-', '_'];

/// Split a version-id into its components, lazily.
///
/// An empty id yields a single empty component, and doubled separators yield
/// empty components in between; the comparators take malformed ids as they
/// come and still produce a definite ordering.
fn components(id: &str) -> impl Iterator<Item = &str> + '_ {
    id.split(SEPARATORS)
}

/// Parse a component as a Java int.
///
/// The grammar bounds numeric components to 2147483647. A numeral that
/// overflows that bound is not a number at all for comparison purposes and
/// falls back to lexical ordering, so the accumulator is widened to i64 and
/// parsing fails outright on overflow or on the first non-digit.
fn parse_java_int(s: &str) -> Option<i32> {
    if s.is_empty() {
        return None;
    }
    let mut sum: i64 = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            return None;
        }
        sum = sum * 10 + i64::from(b - b'0');
        if sum > i64::from(i32::MAX) {
            return None;
        }
    }
    Some(sum as i32)
}

/// Comparator for version-ids as defined by the JSR 56 grammar
pub struct Comparator;

impl Comparator {
    /// Compare two components of a version-id.
    ///
    /// Numeric when both sides parse as bounded Java ints, byte-wise lexical
    /// otherwise. Not locale-aware.
    pub fn compare_component(a: &str, b: &str) -> Ordering {
        match (parse_java_int(a), parse_java_int(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => a.cmp(b),
        }
    }

    /// Compare two version-ids for a Prefix Match.
    ///
    /// Components are compared left to right; the walk stops as soon as
    /// either id runs out of components, so trailing components on the longer
    /// side are don't-care: `"1.2"` prefix-matches `"1.2.3"`.
    pub fn prefix_match(id1: &str, id2: &str) -> Ordering {
        let mut c1 = components(id1);
        let mut c2 = components(id2);
        let mut res = Ordering::Equal;
        while res == Ordering::Equal {
            match (c1.next(), c2.next()) {
                (Some(a), Some(b)) => res = Self::compare_component(a, b),
                _ => break,
            }
        }
        res
    }

    /// Compare two version-ids for an Exact Match.
    ///
    /// Components are compared left to right; when one id is exhausted its
    /// missing components are taken as the literal `"0"`, so `"1.2"`
    /// exact-matches `"1.2.0"` but not `"1.2.1"`.
    pub fn exact_match(id1: &str, id2: &str) -> Ordering {
        let mut c1 = components(id1);
        let mut c2 = components(id2);
        let mut res = Ordering::Equal;
        while res == Ordering::Equal {
            res = match (c1.next(), c2.next()) {
                (Some(a), Some(b)) => Self::compare_component(a, b),
                (Some(a), None) => Self::compare_component(a, "0"),
                (None, Some(b)) => Self::compare_component("0", b),
                (None, None) => break,
            };
        }
        res
    }
}

/// Compare two version-ids for a Prefix Match.
pub fn prefix_version_compare(id1: &str, id2: &str) -> Ordering {
    Comparator::prefix_match(id1, id2)
}

/// Compare two version-ids for an Exact Match.
pub fn exact_version_compare(id1: &str, id2: &str) -> Ordering {
    Comparator::exact_match(id1, id2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_component_numeric() {
        assert_eq!(Comparator::compare_component("2", "10"), Ordering::Less);
        assert_eq!(Comparator::compare_component("10", "9"), Ordering::Greater);
        assert_eq!(Comparator::compare_component("007", "7"), Ordering::Equal);
        assert_eq!(Comparator::compare_component("0", "0"), Ordering::Equal);
        assert_eq!(
            Comparator::compare_component("2147483647", "3"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_component_lexical() {
        assert_eq!(Comparator::compare_component("ea", "fcs"), Ordering::Less);
        assert_eq!(Comparator::compare_component("beta", "beta"), Ordering::Equal);
        // Mixed operands compare as text, and "10" < "9" as text
        assert_eq!(Comparator::compare_component("10", "beta"), Ordering::Less);
        assert_eq!(Comparator::compare_component("10b", "9"), Ordering::Less);
    }

    #[test]
    fn test_compare_component_overflow_is_lexical() {
        // 2147483648 exceeds the Java int bound; as text, '2' < '3'
        assert_eq!(
            Comparator::compare_component("2147483648", "3"),
            Ordering::Less
        );
        assert_eq!(
            Comparator::compare_component("99999999999", "2"),
            Ordering::Greater
        );
        // Still lexical when both sides overflow
        assert_eq!(
            Comparator::compare_component("99999999999", "100000000000"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_component_empty_is_not_numeric() {
        assert_eq!(Comparator::compare_component("", "0"), Ordering::Less);
        assert_eq!(Comparator::compare_component("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(Comparator::prefix_match("1.2", "1.2.3"), Ordering::Equal);
        assert_eq!(Comparator::prefix_match("1.2.3", "1.2"), Ordering::Equal);
        assert_eq!(Comparator::prefix_match("1.3", "1.2.3"), Ordering::Greater);
        assert_eq!(Comparator::prefix_match("1.2", "1.3.0"), Ordering::Less);
        assert_eq!(Comparator::prefix_match("1.4.2", "1.4.2"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_match_mixed_separators() {
        // All three separators delimit components the same way
        assert_eq!(Comparator::prefix_match("1.4", "1_4_2"), Ordering::Equal);
        assert_eq!(Comparator::prefix_match("1-4", "1.4.2"), Ordering::Equal);
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(Comparator::exact_match("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(Comparator::exact_match("1.2.0.0", "1.2"), Ordering::Equal);
        assert_eq!(Comparator::exact_match("1.2", "1.2.1"), Ordering::Less);
        assert_eq!(Comparator::exact_match("1.2.1", "1.2"), Ordering::Greater);
        assert_eq!(
            Comparator::exact_match("1.8.0_202", "1.8.0_201"),
            Ordering::Greater
        );
        assert_eq!(
            Comparator::exact_match("1.8.0_202", "1.8.0.202"),
            Ordering::Equal
        );
    }

    #[test]
    fn test_exact_match_non_numeric_tail() {
        // "ea" against an implicit "0" compares as text
        assert_eq!(Comparator::exact_match("1.2-ea", "1.2"), Ordering::Greater);
        assert_eq!(Comparator::exact_match("1.2", "1.2-ea"), Ordering::Less);
    }

    #[test]
    fn test_comparators_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(Comparator::prefix_match("1.2", "1.2.3"), Ordering::Equal);
            assert_eq!(Comparator::exact_match("1.2", "1.2.3"), Ordering::Less);
        }
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(prefix_version_compare("1.2", "1.2.3"), Ordering::Equal);
        assert_eq!(exact_version_compare("1.2", "1.2.3"), Ordering::Less);
    }
}
