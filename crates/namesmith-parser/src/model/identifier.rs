//! Canonical `LETTERS-NUMBER` codes.

use std::fmt;

use super::ParseError;
use crate::parser::number;

/// A canonical code of the form `LETTERS-NUMBER`.
///
/// `LETTERS` is 1-6 uppercase ASCII letters. `NUMBER` is normalized with
/// [`number::normalize`]: codes written with three or fewer digits are padded
/// to exactly three, longer ones lose their leading zeros.
///
/// ```
/// use namesmith_parser::Identifier;
///
/// let id = Identifier::new("zrk", "02").unwrap();
/// assert_eq!(id.to_string(), "ZRK-002");
///
/// let id = Identifier::new("FC", "00231").unwrap();
/// assert_eq!(id.to_string(), "FC-231");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    letters: String,
    number: String,
}

impl Identifier {
    /// Build an identifier from the raw letter and digit runs of a match.
    ///
    /// Fails if `letters` is not 1-6 ASCII letters or `digits` is not 2-6
    /// ASCII digits.
    pub fn new(letters: &str, digits: &str) -> Result<Self, ParseError> {
        if letters.is_empty()
            || letters.len() > 6
            || !letters.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ParseError(format!("invalid identifier prefix: {letters:?}")));
        }
        if digits.len() < 2 || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseError(format!("invalid identifier number: {digits:?}")));
        }

        Ok(Self {
            letters: letters.to_ascii_uppercase(),
            number: number::normalize(digits),
        })
    }

    /// The upper-cased letter prefix.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// The normalized number.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.letters, self.number)
    }
}

/// An identifier together with where it was found in the filename.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierMatch {
    /// The canonical identifier.
    pub identifier: Identifier,
    /// The matched text exactly as written in the filename.
    pub raw: String,
    /// Byte range of `raw` within the filename.
    pub span: (usize, usize),
}
