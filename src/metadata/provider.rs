//! Trait definition and types for metadata resolvers.
//!
//! This module defines the [`MetadataResolver`] trait that every lookup
//! backend implements, the response shape it returns, and the rule that turns
//! a response into either usable metadata or a [`LookupFailure`].

use async_trait::async_trait;
use namesmith_parser::Identifier;
use serde::{Deserialize, Serialize};

/// Status code of a successful lookup.
pub const STATUS_OK: u16 = 200;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A performer credited on a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    /// Display name.
    pub name: String,
}

impl Performer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Descriptive metadata for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataResult {
    /// Free-text title.
    #[serde(default)]
    pub title: String,
    /// Performers in billing order; may be empty.
    #[serde(default, alias = "stars")]
    pub performers: Vec<Performer>,
}

impl MetadataResult {
    /// The first-billed performer, if any.
    pub fn primary_performer(&self) -> Option<&Performer> {
        self.performers.first()
    }
}

/// Raw answer of a resolver: a status code and an optional result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub status: u16,
    #[serde(default)]
    pub result: Option<MetadataResult>,
}

impl LookupResponse {
    /// A 200 response carrying `result`.
    pub fn ok(result: MetadataResult) -> Self {
        Self {
            status: STATUS_OK,
            result: Some(result),
        }
    }

    /// A response with no result.
    pub fn not_found(status: u16) -> Self {
        Self {
            status,
            result: None,
        }
    }
}

/// Lookup preferences forwarded to the resolver unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupPreferences {
    /// Prefer curated / editorially reviewed sources.
    pub prefer_curated: bool,
    /// Also consider uncensored variants of the title.
    pub include_uncensored: bool,
}

// ---------------------------------------------------------------------------
// Failure classification
// ---------------------------------------------------------------------------

/// Why a lookup produced no usable metadata.
///
/// All variants are handled the same way by the renamer; they only differ in
/// what gets logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    #[error("resolver returned status {0}")]
    Status(u16),

    #[error("no result for identifier")]
    Missing,

    #[error("result has an empty title")]
    EmptyTitle,

    #[error("lookup error: {0}")]
    Transport(String),
}

/// Turn a resolver outcome into metadata, or the reason there is none.
///
/// A non-200 status, a missing result, or a blank title all count as failure.
pub fn classify(
    outcome: anyhow::Result<LookupResponse>,
) -> Result<MetadataResult, LookupFailure> {
    let response = outcome.map_err(|e| LookupFailure::Transport(format!("{e:#}")))?;

    if response.status != STATUS_OK {
        return Err(LookupFailure::Status(response.status));
    }

    let result = response.result.ok_or(LookupFailure::Missing)?;
    if result.title.trim().is_empty() {
        return Err(LookupFailure::EmptyTitle);
    }

    Ok(result)
}

// ---------------------------------------------------------------------------
// Resolver trait
// ---------------------------------------------------------------------------

/// Async trait that every metadata lookup backend implements.
///
/// The renamer calls [`resolve`](MetadataResolver::resolve) once per file and
/// awaits it before touching the next file; implementations need not support
/// concurrent calls efficiently.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    /// Short, lowercase identifier for this resolver (e.g. `"command"`).
    fn name(&self) -> &'static str;

    /// Look up metadata for `identifier`.
    ///
    /// Transport problems are returned as `Err`; a "not found" answer is an
    /// `Ok` response with a non-200 status or no result.
    async fn resolve(
        &self,
        identifier: &Identifier,
        preferences: LookupPreferences,
    ) -> anyhow::Result<LookupResponse>;
}
