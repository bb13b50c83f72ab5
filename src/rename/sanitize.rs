//! Title sanitizing.
//!
//! Looked-up titles are free text. Before one can become part of a file name
//! its noise keywords are removed, characters illegal on common filesystems
//! are replaced, and overly long titles are cut.

/// Characters replaced with [`REPLACEMENT`].
const ILLEGAL_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

const REPLACEMENT: char = '-';

/// Appended to titles that were cut.
pub const ELLIPSIS: char = '…';

/// Replace every filesystem-illegal character with a hyphen.
///
/// ```
/// use namesmith::rename::sanitize::replace_illegal;
///
/// assert_eq!(replace_illegal(r#"a/b\c:d*e?f"g<h>i|j"#), "a-b-c-d-e-f-g-h-i-j");
/// ```
pub fn replace_illegal(text: &str) -> String {
    text.chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { REPLACEMENT } else { c })
        .collect()
}

/// Collapse runs of ASCII spaces and trim them from both ends.
///
/// Other whitespace (such as the ideographic space) is title content and is
/// left alone.
fn collapse_spaces(text: &str) -> String {
    text.split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cleans looked-up titles for use in file names.
#[derive(Debug, Clone)]
pub struct TitleSanitizer {
    noise_keywords: Vec<String>,
    max_chars: usize,
}

impl TitleSanitizer {
    pub fn new(noise_keywords: Vec<String>, max_chars: usize) -> Self {
        Self {
            noise_keywords,
            max_chars,
        }
    }

    /// Sanitize a title.
    ///
    /// Order matters: keywords are removed first (as literal substrings), then
    /// illegal characters are replaced, and only then is the length checked.
    pub fn sanitize(&self, title: &str) -> String {
        let mut text = title.to_string();
        for keyword in self.noise_keywords.iter().filter(|k| !k.is_empty()) {
            text = text.replace(keyword.as_str(), "");
        }

        let text = collapse_spaces(&replace_illegal(&text));
        self.truncate(text)
    }

    fn truncate(&self, text: String) -> String {
        if text.chars().count() <= self.max_chars {
            return text;
        }
        let mut cut: String = text.chars().take(self.max_chars).collect();
        cut.push(ELLIPSIS);
        cut
    }
}

impl Default for TitleSanitizer {
    fn default() -> Self {
        Self::new(Vec::new(), 50)
    }
}
