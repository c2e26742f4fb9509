//! Parsed version-string representation
//!
//! The raw string API answers one question per call; this layer parses a
//! version-string once, validating it against the grammar, and can then be
//! matched against many releases and printed back out.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::grammar;
use crate::matcher::acceptable_id;

/// Error type for version-string parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionStringError {
    #[error("Empty version string")]
    Empty,
    #[error("Invalid simple-element \"{0}\"")]
    InvalidSimpleElement(String),
}

/// Match relaxation modifier of a simple-element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// No modifier; the release must be an exact match
    Exact,
    /// `*`; the version-id must be a prefix of the release
    Prefix,
    /// `+`; the release must be this version-id or newer
    AtLeast,
}

impl Modifier {
    /// Get the string representation of the modifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Exact => "",
            Modifier::Prefix => "*",
            Modifier::AtLeast => "+",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A version-id with an optional trailing modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleElement {
    version_id: String,
    modifier: Modifier,
}

impl SimpleElement {
    /// Parse and validate a simple-element.
    pub fn parse(simple_element: &str) -> Result<Self, VersionStringError> {
        if !grammar::is_valid_simple_element(simple_element) {
            return Err(VersionStringError::InvalidSimpleElement(
                simple_element.to_string(),
            ));
        }
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
        Ok(SimpleElement {
            version_id: version_id.to_string(),
            modifier,
        })
    }

    /// Get the version-id
    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    /// Get the modifier
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Check whether a release satisfies this simple-element.
    pub fn accepts(&self, release: &str) -> bool {
        acceptable_id(release, &self.version_id, self.modifier)
    }
}

impl fmt::Display for SimpleElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.version_id, self.modifier)
    }
}

/// The intersection (and) of one or more simple-elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    simple_elements: Vec<SimpleElement>,
}

impl Element {
    /// Parse and validate an element.
    pub fn parse(element: &str) -> Result<Self, VersionStringError> {
        let simple_elements = element
            .split('&')
            .map(SimpleElement::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Element { simple_elements })
    }

    /// Get the simple-elements
    pub fn simple_elements(&self) -> &[SimpleElement] {
        &self.simple_elements
    }

    /// Check whether a release satisfies every simple-element.
    pub fn accepts(&self, release: &str) -> bool {
        self.simple_elements.iter().all(|s| s.accepts(release))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.simple_elements.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", parts.join("&"))
    }
}

/// A parsed version-string: the union (or) of one or more elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString {
    elements: Vec<Element>,
}

impl VersionString {
    /// Parse and validate a version-string.
    pub fn parse(version_string: &str) -> Result<Self, VersionStringError> {
        if version_string.is_empty() {
            return Err(VersionStringError::Empty);
        }
        let elements = version_string
            .split(' ')
            .map(Element::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VersionString { elements })
    }

    /// Get the elements
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Check whether a release satisfies at least one element.
    pub fn matches(&self, release: &str) -> bool {
        self.elements.iter().any(|e| e.accepts(release))
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for VersionString {
    type Err = VersionStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_element() {
        let simple = SimpleElement::parse("1.6+").unwrap();
        assert_eq!(simple.version_id(), "1.6");
        assert_eq!(simple.modifier(), Modifier::AtLeast);

        let simple = SimpleElement::parse("1.6*").unwrap();
        assert_eq!(simple.modifier(), Modifier::Prefix);

        let simple = SimpleElement::parse("1.6.0").unwrap();
        assert_eq!(simple.modifier(), Modifier::Exact);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(
            SimpleElement::parse("*"),
            Err(VersionStringError::InvalidSimpleElement("*".to_string()))
        );
        assert!(Element::parse("1.6&&1.7").is_err());
        assert_eq!(VersionString::parse(""), Err(VersionStringError::Empty));
        assert!(VersionString::parse("1.6  1.7").is_err());
        assert!(VersionString::parse("1..6").is_err());
    }

    #[test]
    fn test_matches() {
        let vs = VersionString::parse("1.5+ 1.6*").unwrap();
        assert!(vs.matches("1.6.0_20"));
        assert!(vs.matches("1.7.0"));
        assert!(!vs.matches("1.4.2"));
        assert!(!vs.matches("1.6.0-ea"));
    }

    #[test]
    fn test_matches_agrees_with_raw_api() {
        let cases = [
            ("1.6.0_20", "1.5+ 1.6* 1.7*"),
            ("1.8.0-ea", "1.8*"),
            ("1.8.0-ea", "1.8.0-ea*"),
            ("1.2.0", "1.4.2 1.5+"),
            ("1.4.2", "1.4.2&1.4+"),
        ];
        for (release, version_string) in cases {
            let parsed = VersionString::parse(version_string).unwrap();
            assert_eq!(
                parsed.matches(release),
                crate::matcher::is_acceptable_release(release, version_string),
                "disagreement on {release} vs {version_string}"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for source in ["1.5+ 1.6*", "1.6+&1.8.0", "1.8.0_202", "1.4.2-ea+"] {
            let parsed = VersionString::parse(source).unwrap();
            assert_eq!(parsed.to_string(), source);
            assert_eq!(VersionString::parse(&parsed.to_string()).unwrap(), parsed);
        }
    }

    #[test]
    fn test_from_str() {
        let vs: VersionString = "1.5+ 1.6*".parse().unwrap();
        assert_eq!(vs.elements().len(), 2);
        assert!("".parse::<VersionString>().is_err());
    }

    #[test]
    fn test_modifier_display() {
        assert_eq!(Modifier::Exact.to_string(), "");
        assert_eq!(Modifier::Prefix.to_string(), "*");
        assert_eq!(Modifier::AtLeast.to_string(), "+");
    }
}
