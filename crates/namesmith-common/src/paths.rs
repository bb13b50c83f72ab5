//! Path utilities for detecting renameable files.
//!
//! The renamer only touches media files and their sidecars. These helpers
//! check a path against the extension allow-list, detect hidden entries and
//! split a file name into base and extension the same way everywhere in the
//! workspace.

use std::path::Path;

/// List of supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "wmv", "mov", "flv", "rmvb", "m4v"];

/// List of supported audio file extensions.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "opus", "m4a"];

/// List of supported subtitle file extensions.
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "vtt"];

/// Check whether the extension of `path` is in `allowed`.
///
/// Comparison is case-insensitive; `allowed` entries are expected without the
/// leading dot and in lowercase (as produced by [`default_extensions`]).
///
/// ```
/// use std::path::Path;
/// use namesmith_common::paths::{default_extensions, has_allowed_extension};
///
/// let allowed = default_extensions();
/// assert!(has_allowed_extension(Path::new("/path/to/ABP-123.RMVB"), &allowed));
/// assert!(!has_allowed_extension(Path::new("ABP-123.nfo"), &allowed));
/// ```
pub fn has_allowed_extension<S: AsRef<str>>(path: &Path, allowed: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.as_ref() == ext)
        })
        .unwrap_or(false)
}

/// Check if a path names a hidden entry (file name starting with a dot).
///
/// This also covers AppleDouble companions such as `._ABP-123.mp4`.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

/// Split a file name into its base and extension.
///
/// The extension keeps its leading dot and original casing. Leading dots do
/// not start an extension, so `.hidden` has no extension, and a trailing dot
/// is returned as the extension `"."`.
///
/// ```
/// use namesmith_common::paths::split_extension;
///
/// assert_eq!(split_extension("hhd800.com@ZRK-002.mp4"), ("hhd800.com@ZRK-002", ".mp4"));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// assert_eq!(split_extension("noext"), ("noext", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(idx) => file_name.split_at(leading + idx),
        None => (file_name, ""),
    }
}

/// The default allow-list: every video, audio and subtitle extension.
#[must_use]
pub fn default_extensions() -> Vec<String> {
    VIDEO_EXTENSIONS
        .iter()
        .chain(AUDIO_EXTENSIONS)
        .chain(SUBTITLE_EXTENSIONS)
        .map(|e| e.to_string())
        .collect()
}
