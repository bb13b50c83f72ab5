//! Directory walking and rename scheduling.
//!
//! The [`RenameScheduler`] walks a tree one file at a time, turns every
//! identified file into a plan, applies it in execute mode and tallies the
//! outcome in a [`RunReport`].

pub mod conflict;

use std::path::{Path, PathBuf};
use std::time::Duration;

use namesmith_common::paths::{has_allowed_extension, is_hidden};
use namesmith_parser::ParsedName;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::rename::{RenameAction, RenameError, RenamePlan, Renamer, RunMode, RunReport};

pub use conflict::ConflictResolver;

/// Errors that abort a whole run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Directory '{}' does not exist", .0.display())]
    NotADirectory(PathBuf),
}

/// Walks a directory tree and renames identified files, strictly in sequence.
pub struct RenameScheduler {
    renamer: Renamer,
    conflicts: ConflictResolver,
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    lookup_delay: Duration,
    startup_delay: Duration,
}

impl RenameScheduler {
    /// Build a scheduler from the `[scan]` and `[timing]` sections.
    pub fn from_config(renamer: Renamer, config: &Config) -> Self {
        Self {
            renamer,
            conflicts: ConflictResolver::new(),
            extensions: config.scan.extensions.clone(),
            excluded_dirs: config.scan.excluded_dirs.clone(),
            lookup_delay: config.timing.lookup_delay(),
            startup_delay: config.timing.startup_delay(),
        }
    }

    /// Override the pause taken after every identified file.
    pub fn with_lookup_delay(mut self, delay: Duration) -> Self {
        self.lookup_delay = delay;
        self
    }

    /// Process every file below `root`.
    ///
    /// Per-file problems are recorded in the report and never stop the walk;
    /// only a root that is not a directory fails the run.
    pub async fn run(&self, root: &Path, mode: RunMode) -> Result<RunReport, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        info!("Scanning {:?} ({:?} mode)", root, mode);
        if mode.is_execute() && !self.startup_delay.is_zero() {
            info!("Renaming starts in {:?}", self.startup_delay);
            tokio::time::sleep(self.startup_delay).await;
        }

        let mut report = RunReport::new(mode, root);

        let walker = WalkDir::new(root)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_entry(|entry| !self.is_excluded_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    warn!("Cannot read {:?}: {}", path, e);
                    report.record_failure(&path, None, e);
                    continue;
                }
            };

            if entry.path().is_file() {
                self.process_file(entry.path(), mode, &mut report).await;
            }
        }

        let report = report.finish();
        info!(
            "Run complete: {} processed, {} errors, {} skipped",
            report.processed, report.errors, report.skipped
        );
        Ok(report)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.excluded_dirs.iter().any(|d| d == name))
    }

    async fn process_file(&self, path: &Path, mode: RunMode, report: &mut RunReport) {
        if is_hidden(path) {
            debug!("Skipping hidden file {:?}", path);
            report.record_plan(&RenamePlan::skip_unsupported(path, "hidden file"));
            return;
        }
        if !has_allowed_extension(path, &self.extensions) {
            debug!("Skipping unsupported file {:?}", path);
            report.record_plan(&RenamePlan::skip_unsupported(path, "unsupported extension"));
            return;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let parsed = namesmith_parser::parse(&file_name);
        let Some(identifier) = parsed.id().map(|id| id.to_string()) else {
            debug!("No identifier in {:?}", file_name);
            report.record_plan(&RenamePlan::skip_no_id(path));
            return;
        };

        debug!("Processing {} ({:?})", identifier, path);
        match self.apply(path, &parsed, mode).await {
            Ok(plan) => report.record_plan(&plan),
            Err(e) => {
                warn!("Failed to process {} ({:?}): {}", identifier, path, e);
                report.record_failure(path, Some(identifier), e);
            }
        }

        if !self.lookup_delay.is_zero() {
            tokio::time::sleep(self.lookup_delay).await;
        }
    }

    async fn apply(
        &self,
        path: &Path,
        parsed: &ParsedName,
        mode: RunMode,
    ) -> Result<RenamePlan, RenameError> {
        let plan = self.renamer.plan(path, parsed).await?;

        if !plan.action.is_rename() {
            warn!(
                "Skipping {:?} [{}]: {}",
                path,
                plan.action,
                plan.reason.as_deref().unwrap_or_default()
            );
            return Ok(plan);
        }

        let target = plan.target_name().unwrap_or_default();
        if !mode.is_execute() {
            info!("[{}] {:?} -> {:?}", plan.action, plan.source_name(), target);
            return Ok(plan);
        }

        let plan = self.conflicts.resolve(plan).await?;
        if plan.action == RenameAction::SkipExists {
            warn!("Target {:?} already exists, leaving {:?} untouched", target, path);
            return Ok(plan);
        }

        self.conflicts.commit(&plan).await?;
        info!("Renamed {:?} -> {:?}", plan.source_name(), target);
        Ok(plan)
    }
}
