//! Multi-part marker detection.

use crate::model::SegmentMarker;

/// Detect a part marker in a base name (extension already removed).
///
/// The base is split into maximal runs of ASCII letters and digits and only
/// the last run is inspected.
///
/// ```
/// use namesmith_parser::parser::segment::detect;
///
/// assert_eq!(detect("ABC-123 B").map(|m| m.as_char()), Some('B'));
/// assert_eq!(detect("ABC-123"), None);
/// assert_eq!(detect("ABC-123 E"), None);
/// ```
pub fn detect(base: &str) -> Option<SegmentMarker> {
    base.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .next_back()
        .and_then(SegmentMarker::from_token)
}
