//! # namesmith-parser
//!
//! Identifies video files from noisy filenames.
//!
//! The parser extracts a canonical `LETTERS-NUMBER` code (the rightmost
//! code-shaped run in the name), normalizes its number, and detects an
//! optional multi-part marker from the last token of the base name.
//!
//! ## Quick Start
//!
//! ```
//! use namesmith_parser::parse;
//!
//! let result = parse("hhd800.com@ZRK-002 B.mp4");
//!
//! assert_eq!(result.id().unwrap().to_string(), "ZRK-002");
//! assert_eq!(result.segment.unwrap().as_char(), 'B');
//! assert!(result.is_ambiguous());
//! ```

pub mod model;
pub mod parser;

pub use model::{Identifier, IdentifierMatch, ParseError, ParsedName, SegmentMarker};

/// Parse a filename (base plus extension, no directory components).
///
/// # Examples
///
/// ```
/// use namesmith_parser::parse;
///
/// let result = parse("abp_0123.mkv");
/// assert_eq!(result.id().unwrap().to_string(), "ABP-123");
/// assert!(result.segment.is_none());
///
/// let result = parse("holiday.mp4");
/// assert!(result.id().is_none());
/// ```
pub fn parse(file_name: &str) -> ParsedName {
    parser::parse_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_site_prefix() {
        let result = parse("hhd800.com@ZRK-002.mp4");
        assert_eq!(result.id().unwrap().to_string(), "ZRK-002");
        assert_eq!(result.candidates, 2);
        assert!(result.segment.is_none());
        assert_eq!(result.file_name, "hhd800.com@ZRK-002.mp4");
    }

    #[test]
    fn test_parse_segment_markers() {
        assert_eq!(parse("ABC-123 B.mp4").segment.map(|m| m.as_char()), Some('B'));
        assert_eq!(parse("ABC-123.mp4").segment, None);
        assert_eq!(parse("ABC-123 E.mp4").segment, None);
        assert_eq!(parse("abc-123-c.mkv").segment.map(|m| m.as_char()), Some('C'));
    }

    #[test]
    fn test_extension_never_forms_marker() {
        // The extension is removed before tokenizing.
        assert_eq!(parse("ABC-123.a").segment, None);
    }

    #[test]
    fn test_segment_independent_of_identifier() {
        let result = parse("Some Title 2 ABC-123 1.mp4");
        assert_eq!(result.id().unwrap().to_string(), "ABC-123");
        assert_eq!(result.segment.map(|m| m.as_char()), Some('1'));
    }

    #[test]
    fn test_no_identifier() {
        let result = parse("family holiday.mp4");
        assert!(result.identifier.is_none());
        assert_eq!(result.candidates, 0);
        assert!(!result.is_ambiguous());
    }
}
