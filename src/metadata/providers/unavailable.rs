//! Resolver used when no lookup backend is configured.

use async_trait::async_trait;
use namesmith_parser::Identifier;

use crate::metadata::provider::{LookupPreferences, LookupResponse, MetadataResolver};

/// Fails every lookup, so only the local fallback can rename files.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableResolver;

#[async_trait]
impl MetadataResolver for UnavailableResolver {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn resolve(
        &self,
        _identifier: &Identifier,
        _preferences: LookupPreferences,
    ) -> anyhow::Result<LookupResponse> {
        anyhow::bail!("no metadata resolver configured")
    }
}
