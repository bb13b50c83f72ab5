//! Filename parsers.
//!
//! Each submodule handles one concern. They are independent: the segment
//! detector never looks at where the identifier was found.

pub mod identifier;
pub mod number;
pub mod segment;

use namesmith_common::paths::split_extension;

use crate::model::ParsedName;

/// Parse a filename (base plus extension, no directory).
pub fn parse_file_name(file_name: &str) -> ParsedName {
    let candidates = identifier::find_all(file_name);
    let count = candidates.len();

    let (base, _ext) = split_extension(file_name);

    ParsedName {
        file_name: file_name.to_string(),
        identifier: candidates.into_iter().last(),
        candidates: count,
        segment: segment::detect(base),
    }
}
