//! Version-string grammar validation
//!
//! The official grammar (JSR 56, Appendix A):
//!
//! ```text
//! version-string ::= element ( " " element )*
//! element        ::= simple-element ( "&" simple-element )*
//! simple-element ::= version-id | version-id modifier
//! modifier       ::= "+" | "*"
//! version-id     ::= string ( separator string )*
//! string         ::= char ( char )*
//! char           ::= any ASCII character except a space, an ampersand,
//!                    a separator or a modifier
//! separator      ::= "." | "-" | "_"
//! ```
//!
//! Rather than a top-down parser, a valid version-id is recognized by three
//! properties: it contains no space, ampersand or modifier; it neither begins
//! nor ends with a separator; and it contains no two adjacent separators.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One or more strings joined by single separators; the string alphabet
    // excludes spaces, ampersands, modifiers and separators. Rejects empty
    // input, leading/trailing separators and adjacent separators in one go.
    static ref VERSION_ID_RE: Regex =
        Regex::new(r"^[^ &+*._-]+(?:[._-][^ &+*._-]+)*$").unwrap();
}

/// Check whether a string is a valid simple-element: a version-id with an
/// optional trailing `+` or `*` modifier.
pub fn is_valid_simple_element(simple_element: &str) -> bool {
    let version_id = match simple_element.as_bytes().last() {
        None => return false,
        Some(b'+') | Some(b'*') => &simple_element[..simple_element.len() - 1],
        Some(_) => simple_element,
    };
    VERSION_ID_RE.is_match(version_id)
}

/// Check whether a string is a valid element: one or more valid
/// simple-elements joined by `&`.
pub fn is_valid_element(element: &str) -> bool {
    !element.is_empty() && element.split('&').all(is_valid_simple_element)
}

/// Check whether a string is a valid version-string: one or more valid
/// elements joined by spaces.
///
/// Validity is AND across elements; every element must be well-formed for the
/// expression to be usable, even though acceptability is OR across them.
pub fn is_valid_version_string(version_string: &str) -> bool {
    !version_string.is_empty() && version_string.split(' ').all(is_valid_element)
}
