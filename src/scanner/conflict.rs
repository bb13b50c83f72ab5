//! Collision checks and the rename itself.

use std::path::Path;

use crate::rename::{RenameError, RenamePlan};

/// Guards against overwriting existing files.
///
/// A plan whose target already exists is downgraded to `skip-exists`. The
/// existence check is repeated right before renaming so a file that appears
/// between the two steps is still left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictResolver;

impl ConflictResolver {
    pub fn new() -> Self {
        Self
    }

    /// Return `plan` unchanged, or as `skip-exists` if its target is taken.
    ///
    /// A target equal to the source counts as taken.
    pub async fn resolve(&self, plan: RenamePlan) -> Result<RenamePlan, RenameError> {
        let Some(target) = plan.target.as_deref() else {
            return Ok(plan);
        };

        if exists(target).await? {
            return Ok(plan.into_skip_exists());
        }
        Ok(plan)
    }

    /// Rename the source to the target within the same directory.
    ///
    /// Plans without a target are a no-op.
    pub async fn commit(&self, plan: &RenamePlan) -> Result<(), RenameError> {
        let Some(target) = plan.target.as_deref() else {
            return Ok(());
        };

        if exists(target).await? {
            return Err(RenameError::TargetExists(target.to_path_buf()));
        }

        tokio::fs::rename(&plan.source, target)
            .await
            .map_err(|source| RenameError::Io {
                path: plan.source.clone(),
                source,
            })
    }
}

async fn exists(path: &Path) -> Result<bool, RenameError> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|source| RenameError::Io {
            path: path.to_path_buf(),
            source,
        })
}
