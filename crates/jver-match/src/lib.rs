//! JSR 56 version-string matching library
//!
//! This crate decides whether an installed Java release satisfies a
//! version-string expression, using the version-id grammar and matching
//! rules the Java launcher uses for JRE selection.

pub mod grammar;
mod comparator;
mod matcher;
mod version_string;

pub use comparator::{exact_version_compare, prefix_version_compare, Comparator, SEPARATORS};
pub use grammar::{is_valid_element, is_valid_simple_element, is_valid_version_string};
pub use matcher::{is_acceptable_release, ReleaseMatcher};
pub use version_string::{Element, Modifier, SimpleElement, VersionString, VersionStringError};
