//! Rename plans: what will happen to one file.

use std::fmt;
use std::path::{Path, PathBuf};

use namesmith_parser::Identifier;
use serde::Serialize;

/// The action a plan carries out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenameAction {
    /// Rename to a name built from looked-up metadata.
    Rename,
    /// Rename to the original name minus known noise (lookup failed).
    LocalFallback,
    /// The target already exists; the file is left alone.
    SkipExists,
    /// No identifier in the file name.
    SkipNoId,
    /// Hidden file or extension outside the allow-list.
    SkipUnsupported,
    /// Lookup failed and no fallback pattern applied.
    SkipNoFallback,
}

impl RenameAction {
    /// Whether the plan changes the filesystem when executed.
    pub fn is_rename(self) -> bool {
        matches!(self, Self::Rename | Self::LocalFallback)
    }

    /// Whether the plan ends up counted as an error.
    pub fn is_error(self) -> bool {
        matches!(self, Self::SkipExists | Self::SkipNoFallback)
    }
}

impl fmt::Display for RenameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rename => "rename",
            Self::LocalFallback => "local-fallback",
            Self::SkipExists => "skip-exists",
            Self::SkipNoId => "skip-no-id",
            Self::SkipUnsupported => "skip-unsupported",
            Self::SkipNoFallback => "skip-no-fallback",
        };
        f.write_str(s)
    }
}

/// One computed decision for one file.
///
/// Plans are built once and never edited; the conflict check produces a new
/// plan through [`RenamePlan::into_skip_exists`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub target: Option<PathBuf>,
    pub action: RenameAction,
    pub identifier: Option<Identifier>,
    /// Why a skip happened, for skips that need one.
    pub reason: Option<String>,
}

impl RenamePlan {
    fn new(source: &Path, action: RenameAction) -> Self {
        Self {
            source: source.to_path_buf(),
            target: None,
            action,
            identifier: None,
            reason: None,
        }
    }

    /// Rename in place to `file_name` using metadata.
    pub fn rename(source: &Path, file_name: &str, identifier: Identifier) -> Self {
        Self {
            target: Some(sibling(source, file_name)),
            identifier: Some(identifier),
            ..Self::new(source, RenameAction::Rename)
        }
    }

    /// Rename in place to `file_name` computed by the local fallback.
    pub fn local_fallback(
        source: &Path,
        file_name: &str,
        identifier: Identifier,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            target: Some(sibling(source, file_name)),
            identifier: Some(identifier),
            reason: Some(reason.into()),
            ..Self::new(source, RenameAction::LocalFallback)
        }
    }

    pub fn skip_no_id(source: &Path) -> Self {
        Self::new(source, RenameAction::SkipNoId)
    }

    pub fn skip_unsupported(source: &Path, reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::new(source, RenameAction::SkipUnsupported)
        }
    }

    pub fn skip_no_fallback(
        source: &Path,
        identifier: Identifier,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            identifier: Some(identifier),
            reason: Some(reason.into()),
            ..Self::new(source, RenameAction::SkipNoFallback)
        }
    }

    /// The same plan, downgraded because its target is taken.
    pub fn into_skip_exists(self) -> Self {
        Self {
            action: RenameAction::SkipExists,
            reason: Some("target file already exists".to_string()),
            ..self
        }
    }

    /// File name of the source.
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    /// File name of the target, if there is one.
    pub fn target_name(&self) -> Option<String> {
        self.target.as_deref().map(file_name_lossy)
    }
}

fn sibling(source: &Path, file_name: &str) -> PathBuf {
    source
        .parent()
        .map(|dir| dir.join(file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
