//! Run-level bookkeeping.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::plan::{RenameAction, RenamePlan};

/// Whether a run only shows plans or applies them. Fixed for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Preview,
    Execute,
}

impl RunMode {
    pub fn is_execute(self) -> bool {
        self == Self::Execute
    }
}

/// What happened to one file that had an identifier.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub source: PathBuf,
    pub target: Option<PathBuf>,
    pub identifier: Option<String>,
    /// `None` when the file failed before a plan existed.
    pub action: Option<RenameAction>,
    /// Set when the file counted as an error.
    pub error: Option<String>,
}

/// Aggregate result of a run.
///
/// Owned by the scheduler and updated once per file; nothing else mutates it.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub root: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Files renamed (execute) or planned for rename (preview).
    pub processed: usize,
    /// Files that failed for any reason.
    pub errors: usize,
    /// Files skipped without error (no identifier, hidden, unsupported).
    pub skipped: usize,
    /// Of `processed`, how many used the local fallback.
    pub fallbacks: usize,
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new(mode: RunMode, root: &Path) -> Self {
        Self {
            mode,
            root: root.to_path_buf(),
            started_at: Utc::now(),
            finished_at: None,
            processed: 0,
            errors: 0,
            skipped: 0,
            fallbacks: 0,
            entries: Vec::new(),
        }
    }

    /// Record a plan that reached its final state.
    ///
    /// Renames count as processed; `skip-exists` and `skip-no-fallback` count
    /// as errors; the remaining skips are silent.
    pub fn record_plan(&mut self, plan: &RenamePlan) {
        match plan.action {
            RenameAction::SkipNoId | RenameAction::SkipUnsupported => {
                self.skipped += 1;
                return;
            }
            RenameAction::Rename => self.processed += 1,
            RenameAction::LocalFallback => {
                self.processed += 1;
                self.fallbacks += 1;
            }
            RenameAction::SkipExists | RenameAction::SkipNoFallback => self.errors += 1,
        }

        self.entries.push(ReportEntry {
            source: plan.source.clone(),
            target: plan.target.clone(),
            identifier: plan.identifier.as_ref().map(|id| id.to_string()),
            action: Some(plan.action),
            error: plan
                .action
                .is_error()
                .then(|| plan.reason.clone().unwrap_or_else(|| plan.action.to_string())),
        });
    }

    /// Record a file (or walk entry) that failed without a usable plan.
    pub fn record_failure(
        &mut self,
        source: &Path,
        identifier: Option<String>,
        error: impl ToString,
    ) {
        self.errors += 1;
        self.entries.push(ReportEntry {
            source: source.to_path_buf(),
            target: None,
            identifier,
            action: None,
            error: Some(error.to_string()),
        });
    }

    /// Stamp the end time.
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// One-line human summary, used for the notification message.
    pub fn summary(&self) -> String {
        let verb = match self.mode {
            RunMode::Preview => "Previewed",
            RunMode::Execute => "Renamed",
        };
        format!("{verb} {} files, {} errors", self.processed, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namesmith_parser::Identifier;

    fn id() -> Identifier {
        Identifier::new("ABC", "123").unwrap()
    }

    #[test]
    fn counts_by_action() {
        let mut report = RunReport::new(RunMode::Execute, Path::new("/v"));
        let src = Path::new("/v/abc-123.mp4");

        report.record_plan(&RenamePlan::rename(src, "ABC-123 T.mp4", id()));
        report.record_plan(&RenamePlan::local_fallback(src, "ABC-123.mp4", id(), "lookup failed"));
        report.record_plan(&RenamePlan::rename(src, "ABC-123 T.mp4", id()).into_skip_exists());
        report.record_plan(&RenamePlan::skip_no_fallback(src, id(), "lookup failed"));
        report.record_plan(&RenamePlan::skip_no_id(Path::new("/v/holiday.mp4")));
        report.record_plan(&RenamePlan::skip_unsupported(Path::new("/v/.hidden.mp4"), "hidden"));

        assert_eq!(report.processed, 2);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.errors, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.entries.len(), 4);
        assert_eq!(
            report.entries[2].error.as_deref(),
            Some("target file already exists")
        );
        assert!(report.entries[0].error.is_none());
    }

    #[test]
    fn failures_count_as_errors() {
        let mut report = RunReport::new(RunMode::Preview, Path::new("/v"));
        report.record_failure(Path::new("/v/a.mp4"), Some("ABC-123".into()), "permission denied");
        assert_eq!(report.errors, 1);
        assert!(report.entries[0].action.is_none());
        assert_eq!(report.entries[0].error.as_deref(), Some("permission denied"));
    }

    #[test]
    fn summary_and_finish() {
        let mut report = RunReport::new(RunMode::Preview, Path::new("/v"));
        report.processed = 3;
        report.errors = 1;
        assert_eq!(report.summary(), "Previewed 3 files, 1 errors");

        report.mode = RunMode::Execute;
        let report = report.finish();
        assert!(report.finished_at.is_some());
        assert_eq!(report.summary(), "Renamed 3 files, 1 errors");
    }
}
