//! Identifier extraction.
//!
//! Codes look like `ABC-123`, `abc_0123`, `abc 12` or `ABC123`: one to six
//! letters, an optional `-`, `_` or space, then two to six digits. Filenames
//! often carry a site tag before the real code (`hhd800.com@ZRK-002.mp4`), so
//! the rightmost match wins. Names holding two genuinely different codes
//! (multi-episode packs) are not disambiguated beyond that rule.
//!
//! Only ASCII digits count; full-width digits such as `１２３` are
//! deliberately not matched.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Identifier, IdentifierMatch};

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]{1,6})[-_ ]?([0-9]{2,6})").expect("identifier pattern is valid")
});

/// Find every identifier-shaped run, left to right, without overlaps.
pub fn find_all(file_name: &str) -> Vec<IdentifierMatch> {
    CODE_PATTERN
        .captures_iter(file_name)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let identifier = Identifier::new(caps.get(1)?.as_str(), caps.get(2)?.as_str()).ok()?;
            Some(IdentifierMatch {
                identifier,
                raw: whole.as_str().to_string(),
                span: (whole.start(), whole.end()),
            })
        })
        .collect()
}

/// Extract the identifier of a filename: the last match in scan order.
///
/// ```
/// use namesmith_parser::parser::identifier::extract;
///
/// let m = extract("hhd800.com@ZRK-002.mp4").unwrap();
/// assert_eq!(m.identifier.to_string(), "ZRK-002");
/// assert_eq!(m.raw, "ZRK-002");
/// ```
pub fn extract(file_name: &str) -> Option<IdentifierMatch> {
    find_all(file_name).into_iter().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(file_name: &str) -> Option<String> {
        extract(file_name).map(|m| m.identifier.to_string())
    }

    #[test]
    fn test_full_width_digits_ignored() {
        assert_eq!(id("ABC-１２３.mp4"), None);
    }

    #[test]
    fn test_standard_forms() {
        assert_eq!(id("ABP-123.mp4").as_deref(), Some("ABP-123"));
        assert_eq!(id("abp123.mp4").as_deref(), Some("ABP-123"));
        assert_eq!(id("abp_123.mkv").as_deref(), Some("ABP-123"));
        assert_eq!(id("abp 123.mkv").as_deref(), Some("ABP-123"));
    }

    #[test]
    fn test_rightmost_match_wins() {
        assert_eq!(id("hhd800.com@ZRK-002.mp4").as_deref(), Some("ZRK-002"));
        assert_eq!(id("ABC-123 XYZ-456.mp4").as_deref(), Some("XYZ-456"));
    }

    #[test]
    fn test_long_letter_runs_use_trailing_six() {
        assert_eq!(id("abcdefgh123.mp4").as_deref(), Some("CDEFGH-123"));
    }

    #[test]
    fn test_digit_run_capped_at_six() {
        let m = extract("ABC-1234567.mp4").unwrap();
        assert_eq!(m.raw, "ABC-123456");
        assert_eq!(m.identifier.to_string(), "ABC-123456");
    }

    #[test]
    fn test_no_identifier() {
        assert!(extract("holiday.mp4").is_none());
        assert!(extract("A-1.mp4").is_none());
        assert!(extract("123456.mp4").is_none());
        assert!(extract("").is_none());
    }

    #[test]
    fn test_span_points_at_raw_text() {
        let name = "[site] abc-0042 part.mp4";
        let m = extract(name).unwrap();
        assert_eq!(&name[m.span.0..m.span.1], "abc-0042");
        assert_eq!(m.identifier.to_string(), "ABC-42");
    }

    #[test]
    fn test_find_all_counts_candidates() {
        assert_eq!(find_all("hhd800.com@ZRK-002.mp4").len(), 2);
        assert_eq!(find_all("ZRK-002.mp4").len(), 1);
    }
}
