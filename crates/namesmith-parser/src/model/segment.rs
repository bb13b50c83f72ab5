//! Multi-part segment markers.

use std::fmt;

/// A single-character part marker: `A`-`D` or `1`-`4`.
///
/// Letters are always stored upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentMarker(char);

impl SegmentMarker {
    /// Interpret a whole token as a marker.
    ///
    /// Only single-character tokens qualify.
    ///
    /// ```
    /// use namesmith_parser::SegmentMarker;
    ///
    /// assert_eq!(SegmentMarker::from_token("b").map(|m| m.as_char()), Some('B'));
    /// assert_eq!(SegmentMarker::from_token("3").map(|m| m.as_char()), Some('3'));
    /// assert!(SegmentMarker::from_token("E").is_none());
    /// assert!(SegmentMarker::from_token("AB").is_none());
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c.to_ascii_uppercase() {
            c @ ('A'..='D' | '1'..='4') => Some(Self(c)),
            _ => None,
        }
    }

    /// The marker character.
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for SegmentMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
