//! In-memory resolver backed by a fixed table.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use namesmith_parser::Identifier;

use crate::metadata::provider::{
    LookupPreferences, LookupResponse, MetadataResolver, MetadataResult,
};

/// Answers lookups from a table keyed by canonical identifier.
///
/// Unknown identifiers get a 404 response. Every call is recorded so callers
/// can check which identifiers were looked up and in what order.
///
/// ```
/// use namesmith::metadata::{MemoryResolver, MetadataResult, Performer};
///
/// let resolver = MemoryResolver::new().with(
///     "ZRK-002",
///     MetadataResult {
///         title: "好きだと叫んじゃったから。".into(),
///         performers: vec![Performer::new("吉高宁々")],
///     },
/// );
/// assert!(resolver.calls().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryResolver {
    entries: HashMap<String, LookupResponse>,
    calls: Mutex<Vec<String>>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a successful result for `identifier`.
    pub fn with(mut self, identifier: &str, result: MetadataResult) -> Self {
        self.entries
            .insert(identifier.to_string(), LookupResponse::ok(result));
        self
    }

    /// Register an arbitrary response for `identifier`.
    pub fn with_response(mut self, identifier: &str, response: LookupResponse) -> Self {
        self.entries.insert(identifier.to_string(), response);
        self
    }

    /// Identifiers looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MetadataResolver for MemoryResolver {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn resolve(
        &self,
        identifier: &Identifier,
        _preferences: LookupPreferences,
    ) -> anyhow::Result<LookupResponse> {
        let key = identifier.to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }

        Ok(self
            .entries
            .get(&key)
            .cloned()
            .unwrap_or_else(|| LookupResponse::not_found(404)))
    }
}
