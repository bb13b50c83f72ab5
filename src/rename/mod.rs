//! Turning an identified file into a rename plan.
//!
//! # Module layout
//!
//! - [`sanitize`] -- Title cleaning.
//! - [`builder`] -- Target file name composition.
//! - [`fallback`] -- Local cleanup when metadata lookup fails.
//! - [`plan`] -- The per-file decision.
//! - [`report`] -- Run-level counters.

pub mod builder;
pub mod fallback;
pub mod plan;
pub mod report;
pub mod sanitize;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use namesmith_common::paths::split_extension;
use namesmith_parser::{Identifier, ParsedName};

use crate::config::Config;
use crate::metadata::{
    classify, LookupFailure, LookupPreferences, MetadataResolver, MetadataResult,
};

pub use builder::{build_file_name, is_built_name, FilenameParts};
pub use fallback::LocalFallback;
pub use plan::{RenameAction, RenamePlan};
pub use report::{ReportEntry, RunMode, RunReport};
pub use sanitize::TitleSanitizer;

/// Per-file failures.
///
/// None of these abort a run: the scheduler records them against the file
/// and moves on.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("{0}; no local optimization available")]
    NoLocalOptimization(LookupFailure),

    #[error("target already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("file name is not valid UTF-8: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("failed to rename {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Computes a [`RenamePlan`] for one identified file.
pub struct Renamer {
    resolver: Arc<dyn MetadataResolver>,
    preferences: LookupPreferences,
    sanitizer: TitleSanitizer,
    fallback: LocalFallback,
}

impl Renamer {
    pub fn new(
        resolver: Arc<dyn MetadataResolver>,
        preferences: LookupPreferences,
        sanitizer: TitleSanitizer,
        fallback: LocalFallback,
    ) -> Self {
        Self {
            resolver,
            preferences,
            sanitizer,
            fallback,
        }
    }

    /// Build a renamer from the `[rename]` and `[resolver]` sections.
    pub fn from_config(resolver: Arc<dyn MetadataResolver>, config: &Config) -> Self {
        Self::new(
            resolver,
            LookupPreferences::from(&config.resolver),
            TitleSanitizer::new(
                config.rename.noise_keywords.clone(),
                config.rename.title_max_chars,
            ),
            LocalFallback::new(config.rename.fallback_patterns.clone()),
        )
    }

    /// Decide what should happen to `path`.
    ///
    /// `parsed` must be the parse result for the file name of `path`. Files
    /// without an identifier get a `skip-no-id` plan and no lookup is made.
    /// A failed lookup falls back to the local optimizer; when that has
    /// nothing to remove the plan is `skip-no-fallback`.
    pub async fn plan(&self, path: &Path, parsed: &ParsedName) -> Result<RenamePlan, RenameError> {
        let Some(identifier) = parsed.id() else {
            return Ok(RenamePlan::skip_no_id(path));
        };

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| RenameError::InvalidFileName(path.to_path_buf()))?;

        if parsed.is_ambiguous() {
            tracing::debug!(
                "{} identifier candidates in {:?}, using rightmost {}",
                parsed.candidates,
                file_name,
                identifier
            );
        }

        let outcome = self.resolver.resolve(identifier, self.preferences).await;
        let failure = match classify(outcome) {
            Ok(meta) => match self.build_from_metadata(file_name, identifier, parsed, &meta) {
                Some(target) => {
                    tracing::debug!("Resolved {} via {}", identifier, self.resolver.name());
                    let plan = RenamePlan::rename(path, &target, identifier.clone());
                    if target == file_name {
                        return Ok(plan.into_skip_exists());
                    }
                    return Ok(plan);
                }
                None => LookupFailure::EmptyTitle,
            },
            Err(failure) => failure,
        };

        tracing::warn!("Lookup failed for {}: {}", identifier, failure);
        Ok(self.fall_back(path, file_name, identifier, failure))
    }

    /// Compose the target name, or `None` if the title sanitizes to nothing.
    ///
    /// A file already named from this metadata keeps its name.
    fn build_from_metadata(
        &self,
        file_name: &str,
        identifier: &Identifier,
        parsed: &ParsedName,
        meta: &MetadataResult,
    ) -> Option<String> {
        let title = self.sanitizer.sanitize(&meta.title);
        if title.is_empty() {
            return None;
        }

        let performer = meta
            .primary_performer()
            .map(|p| sanitize::replace_illegal(p.name.trim()));
        let (base, extension) = split_extension(file_name);

        if is_built_name(base, identifier, &title, performer.as_deref()) {
            tracing::debug!("{:?} is already named from its metadata", file_name);
            return Some(file_name.to_string());
        }

        Some(build_file_name(&FilenameParts {
            identifier,
            title: &title,
            segment: parsed.segment,
            performer: performer.as_deref(),
            extension,
        }))
    }

    fn fall_back(
        &self,
        path: &Path,
        file_name: &str,
        identifier: &Identifier,
        failure: LookupFailure,
    ) -> RenamePlan {
        match self.fallback.optimize(file_name) {
            Some(target) => {
                RenamePlan::local_fallback(path, &target, identifier.clone(), failure.to_string())
            }
            None => RenamePlan::skip_no_fallback(
                path,
                identifier.clone(),
                RenameError::NoLocalOptimization(failure).to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{LookupResponse, MemoryResolver, Performer};

    fn renamer(resolver: MemoryResolver) -> Renamer {
        Renamer::from_config(Arc::new(resolver), &Config::default())
    }

    fn meta(title: &str, performers: &[&str]) -> MetadataResult {
        MetadataResult {
            title: title.to_string(),
            performers: performers.iter().map(|p| Performer::new(*p)).collect(),
        }
    }

    async fn plan_for(renamer: &Renamer, path: &str) -> RenamePlan {
        let path = Path::new(path);
        let parsed = namesmith_parser::parse(path.file_name().unwrap().to_str().unwrap());
        renamer.plan(path, &parsed).await.unwrap()
    }

    #[tokio::test]
    async fn test_rename_from_metadata() {
        let renamer = renamer(
            MemoryResolver::new().with("ZRK-002", meta("好きだと叫んじゃったから。", &["吉高宁々"])),
        );

        let plan = plan_for(&renamer, "/v/hhd800.com@ZRK-002.mp4").await;
        assert_eq!(plan.action, RenameAction::Rename);
        assert_eq!(
            plan.target_name().as_deref(),
            Some("ZRK-002 好きだと叫んじゃったから。 [吉高宁々].mp4")
        );
        assert_eq!(plan.identifier.unwrap().to_string(), "ZRK-002");
    }

    #[tokio::test]
    async fn test_segment_marker_and_performer_sanitized() {
        let renamer = renamer(MemoryResolver::new().with("ABC-123", meta("Part: One", &["A/B"])));

        let plan = plan_for(&renamer, "/v/abc123 b.MKV").await;
        assert_eq!(plan.target_name().as_deref(), Some("ABC-123 Part- One B [A-B].MKV"));
    }

    #[tokio::test]
    async fn test_lookup_failure_uses_fallback() {
        let resolver = MemoryResolver::new();
        let renamer = renamer(resolver);

        let plan = plan_for(&renamer, "/v/hhd800.com@XYZ-9999.mkv").await;
        assert_eq!(plan.action, RenameAction::LocalFallback);
        assert_eq!(plan.target_name().as_deref(), Some("XYZ-9999.mkv"));
    }

    #[tokio::test]
    async fn test_no_fallback_pattern_is_skip() {
        let renamer = renamer(MemoryResolver::new());

        let plan = plan_for(&renamer, "/v/XYZ-9999.mkv").await;
        assert_eq!(plan.action, RenameAction::SkipNoFallback);
        assert!(plan.target.is_none());
        assert!(plan
            .reason
            .unwrap()
            .contains("no local optimization available"));
    }

    #[tokio::test]
    async fn test_blank_titles_fail_lookup() {
        let resolver = MemoryResolver::new()
            .with("AAA-001", meta("   ", &[]))
            .with("BBB-002", meta("***", &[]));
        let mut config = Config::default();
        config.rename.noise_keywords = vec!["***".to_string()];
        let renamer = Renamer::from_config(Arc::new(resolver), &config);

        let plan = plan_for(&renamer, "/v/hhd800.com@AAA-001.mp4").await;
        assert_eq!(plan.action, RenameAction::LocalFallback);

        let plan = plan_for(&renamer, "/v/BBB-002.mp4").await;
        assert_eq!(plan.action, RenameAction::SkipNoFallback);
    }

    #[tokio::test]
    async fn test_non_ok_status_fails_lookup() {
        let mut response = LookupResponse::ok(meta("Title", &[]));
        response.status = 503;
        let renamer = renamer(MemoryResolver::new().with_response("ABC-123", response));

        let plan = plan_for(&renamer, "/v/ABC-123.mp4").await;
        assert_eq!(plan.action, RenameAction::SkipNoFallback);
    }

    #[tokio::test]
    async fn test_already_named_part_file_keeps_marker() {
        let renamer = renamer(MemoryResolver::new().with("ABC-123", meta("Title", &["Name"])));

        let plan = plan_for(&renamer, "/v/ABC-123 Title A [Name].mp4").await;
        assert_eq!(plan.action, RenameAction::SkipExists);
        assert_eq!(plan.target_name().as_deref(), Some("ABC-123 Title A [Name].mp4"));

        let plan = plan_for(&renamer, "/v/ABC-123 Title [Name].mp4").await;
        assert_eq!(plan.action, RenameAction::SkipExists);
    }

    #[tokio::test]
    async fn test_no_identifier_skips_lookup() {
        let resolver = Arc::new(MemoryResolver::new());
        let renamer = Renamer::from_config(resolver.clone(), &Config::default());

        let path = Path::new("/v/holiday.mp4");
        let plan = renamer
            .plan(path, &namesmith_parser::parse("holiday.mp4"))
            .await
            .unwrap();
        assert_eq!(plan.action, RenameAction::SkipNoId);
        assert!(resolver.calls().is_empty());
    }
}
