//! Local fallback renames for files whose lookup failed.

use namesmith_common::paths::split_extension;

/// Strips known noise substrings (site tags and the like) from file names.
#[derive(Debug, Clone, Default)]
pub struct LocalFallback {
    patterns: Vec<String>,
}

impl LocalFallback {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Compute a cleaned file name, or `None` when no pattern applies.
    ///
    /// Patterns are literal substrings removed from the base name; the
    /// extension is kept as is. A result that would leave the base empty is
    /// also `None`.
    ///
    /// ```
    /// use namesmith::rename::fallback::LocalFallback;
    ///
    /// let fallback = LocalFallback::new(vec!["hhd800.com@".into()]);
    /// assert_eq!(fallback.optimize("hhd800.com@XYZ-9999.mkv").as_deref(), Some("XYZ-9999.mkv"));
    /// assert_eq!(fallback.optimize("XYZ-9999.mkv"), None);
    /// ```
    pub fn optimize(&self, file_name: &str) -> Option<String> {
        let (base, extension) = split_extension(file_name);

        let mut cleaned = base.to_string();
        for pattern in self.patterns.iter().filter(|p| !p.is_empty()) {
            cleaned = cleaned.replace(pattern.as_str(), "");
        }

        if cleaned == base {
            return None;
        }

        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }

        Some(format!("{cleaned}{extension}"))
    }
}
