//! Release acceptability against version-string expressions
//!
//! A version-string is the union (or) of elements separated by spaces; an
//! element is the intersection (and) of simple-elements separated by `&`.
//!
//! JSR 56 is modified by the Java Web Start developer guide, which states
//! that an installed non-FCS (milestone) release, marked by a hyphen in its
//! identifier, is never matched by a relaxed (`+` or `*`) requirement. The
//! one caveat is that a byte-identical match with a hyphen is accepted as a
//! development extension. The hyphen checks below implement exactly that and
//! nothing more.

use std::cmp::Ordering;

use crate::comparator::Comparator;
use crate::version_string::Modifier;

/// Evaluate one version-id requirement against a release.
pub(crate) fn acceptable_id(release: &str, version_id: &str, modifier: Modifier) -> bool {
    match modifier {
        Modifier::Prefix => {
            if release.contains('-') {
                release == version_id
            } else {
                Comparator::prefix_match(release, version_id) == Ordering::Equal
            }
        }
        Modifier::AtLeast => {
            if release.contains('-') {
                release == version_id
            } else {
                Comparator::exact_match(release, version_id) != Ordering::Less
            }
        }
        Modifier::Exact => Comparator::exact_match(release, version_id) == Ordering::Equal,
    }
}

/// Matcher deciding whether an installed release satisfies a version-string
pub struct ReleaseMatcher;

impl ReleaseMatcher {
    /// Check whether `release` is acceptable by `version_string`.
    ///
    /// The version-string is not validated here; malformed expressions still
    /// produce a definite answer through naive splitting, with no
    /// well-formedness guarantee attached. Callers wanting one should check
    /// [`crate::grammar::is_valid_version_string`] first.
    pub fn is_acceptable(release: &str, version_string: &str) -> bool {
        version_string
            .split(' ')
            .any(|element| Self::acceptable_element(release, element))
    }

    /// Check whether `release` satisfies every simple-element of `element`.
    pub fn acceptable_element(release: &str, element: &str) -> bool {
        element
            .split('&')
            .all(|simple| Self::acceptable_simple_element(release, simple))
    }

    /// Check whether `release` satisfies a single simple-element.
    pub fn acceptable_simple_element(release: &str, simple_element: &str) -> bool {
        let (version_id, modifier) = match simple_element.as_bytes().last() {
            Some(b'*') => (
                &simple_element[..simple_element.len() - 1],
                Modifier::Prefix,
            ),
            Some(b'+') => (
                &simple_element[..simple_element.len() - 1],
                Modifier::AtLeast,
            ),
            _ => (simple_element, Modifier::Exact),
        };
        acceptable_id(release, version_id, modifier)
    }

    /// Return all releases that are acceptable by the version-string, in
    /// their original order.
    pub fn satisfied_by(releases: &[&str], version_string: &str) -> Vec<String> {
        releases
            .iter()
            .filter(|release| Self::is_acceptable(release, version_string))
            .map(|release| release.to_string())
            .collect()
    }

    /// Return the newest release acceptable by the version-string, by
    /// exact-match ordering. This is what a launcher picking an installed
    /// runtime wants.
    pub fn best_match(releases: &[&str], version_string: &str) -> Option<String> {
        releases
            .iter()
            .filter(|release| Self::is_acceptable(release, version_string))
            .max_by(|a, b| Comparator::exact_match(a, b))
            .map(|release| release.to_string())
    }

    /// Sort releases in ascending exact-match order.
    pub fn sort(releases: &[&str]) -> Vec<String> {
        Self::usort(releases, true)
    }

    /// Sort releases in descending exact-match order.
    pub fn rsort(releases: &[&str]) -> Vec<String> {
        Self::usort(releases, false)
    }

    fn usort(releases: &[&str], ascending: bool) -> Vec<String> {
        let mut sorted: Vec<String> = releases.iter().map(|r| r.to_string()).collect();
        sorted.sort_by(|a, b| {
            let cmp = Comparator::exact_match(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
        sorted
    }
}

/// Check whether `release` is acceptable by `version_string`.
pub fn is_acceptable_release(release: &str, version_string: &str) -> bool {
    ReleaseMatcher::is_acceptable(release, version_string)
}
