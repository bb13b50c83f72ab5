//! Target file name composition.

use namesmith_parser::{Identifier, SegmentMarker};

/// The pieces a target file name is made of, all already sanitized.
#[derive(Debug, Clone, Copy)]
pub struct FilenameParts<'a> {
    pub identifier: &'a Identifier,
    pub title: &'a str,
    pub segment: Option<SegmentMarker>,
    pub performer: Option<&'a str>,
    /// Extension including its leading dot, or empty.
    pub extension: &'a str,
}

/// Compose `"{identifier} {title}[ {marker}][ [{performer}]]{extension}"`.
///
/// The bracketed performer is left out when there is none, or when the
/// title (with the marker appended) already ends in `" {performer}"`.
///
/// ```
/// use namesmith::rename::builder::{build_file_name, FilenameParts};
/// use namesmith_parser::Identifier;
///
/// let id = Identifier::new("ZRK", "002").unwrap();
/// let name = build_file_name(&FilenameParts {
///     identifier: &id,
///     title: "好きだと叫んじゃったから。",
///     segment: None,
///     performer: Some("吉高宁々"),
///     extension: ".mp4",
/// });
/// assert_eq!(name, "ZRK-002 好きだと叫んじゃったから。 [吉高宁々].mp4");
/// ```
pub fn build_file_name(parts: &FilenameParts<'_>) -> String {
    let mut titled = parts.title.to_string();
    if let Some(marker) = parts.segment {
        titled.push(' ');
        titled.push(marker.as_char());
    }

    let mut name = format!("{} {}", parts.identifier, titled);

    if let Some(performer) = parts.performer.filter(|p| !p.is_empty()) {
        if !titled.ends_with(&format!(" {performer}")) {
            name.push_str(&format!(" [{performer}]"));
        }
    }

    name.push_str(parts.extension);
    name
}

/// Whether `base` is exactly what [`build_file_name`] gives (without the
/// extension) for these parts and some part marker, or none.
///
/// Renamed part files end in the performer bracket, so their marker is no
/// longer the last token and cannot be re-detected. This check keeps a
/// second run from planning a marker-less name for them.
///
/// ```
/// use namesmith::rename::builder::is_built_name;
/// use namesmith_parser::Identifier;
///
/// let id = Identifier::new("ABC", "123").unwrap();
/// assert!(is_built_name("ABC-123 Title A [Name]", &id, "Title", Some("Name")));
/// assert!(!is_built_name("ABC-123 A", &id, "Title", Some("Name")));
/// ```
pub fn is_built_name(
    base: &str,
    identifier: &Identifier,
    title: &str,
    performer: Option<&str>,
) -> bool {
    let prefix = format!("{identifier} {title}");
    let Some(rest) = base.strip_prefix(prefix.as_str()) else {
        return false;
    };

    let marker = rest
        .strip_prefix(' ')
        .and_then(|r| r.split(' ').next())
        .and_then(SegmentMarker::from_token);

    [None, marker].into_iter().any(|segment| {
        build_file_name(&FilenameParts {
            identifier,
            title,
            segment,
            performer,
            extension: "",
        }) == base
    })
}
