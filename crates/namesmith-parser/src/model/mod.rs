//! Data model types for parsed filenames.
//!
//! This module contains the canonical identifier, the multi-part segment
//! marker, and the aggregate [`ParsedName`] returned by the parser.

mod identifier;
mod parsed;
mod segment;

pub use identifier::{Identifier, IdentifierMatch};
pub use parsed::ParsedName;
pub use segment::SegmentMarker;

/// Error type for building model values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
