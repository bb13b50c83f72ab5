//! Parse result for a single filename.

use super::{Identifier, IdentifierMatch, SegmentMarker};

/// Everything the parser could derive from one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedName {
    /// The filename that was parsed, unchanged.
    pub file_name: String,

    /// The winning identifier match, if any.
    pub identifier: Option<IdentifierMatch>,

    /// Number of identifier-shaped matches found in the filename.
    ///
    /// Greater than one means the rightmost match was chosen over others.
    pub candidates: usize,

    /// Part marker taken from the last token of the base name.
    pub segment: Option<SegmentMarker>,
}

impl ParsedName {
    /// Shortcut to the canonical identifier.
    pub fn id(&self) -> Option<&Identifier> {
        self.identifier.as_ref().map(|m| &m.identifier)
    }

    /// Returns `true` when more than one identifier-shaped run was found.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates > 1
    }
}
