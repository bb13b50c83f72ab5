//! Metadata lookup for identified files.
//!
//! This module defines the [`MetadataResolver`] trait and the concrete
//! backends the renamer can use.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition, response types and failure rules.
//! - [`providers`] -- Concrete resolvers (external command, in-memory,
//!   unavailable).

pub mod provider;
pub mod providers;

use std::sync::Arc;

use crate::config::ResolverConfig;

pub use provider::{
    classify, LookupFailure, LookupPreferences, LookupResponse, MetadataResolver, MetadataResult,
    Performer,
};
pub use providers::{CommandResolver, MemoryResolver, UnavailableResolver};

/// Build the resolver described by the configuration.
///
/// Without a configured command every lookup fails and files can only be
/// renamed by the local fallback.
pub fn resolver_from_config(config: &ResolverConfig) -> anyhow::Result<Arc<dyn MetadataResolver>> {
    match &config.command {
        Some(argv) => Ok(Arc::new(CommandResolver::new(argv, config.timeout())?)),
        None => {
            tracing::warn!("No resolver command configured; only local fallback renames apply");
            Ok(Arc::new(UnavailableResolver))
        }
    }
}

impl From<&ResolverConfig> for LookupPreferences {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            prefer_curated: config.prefer_curated,
            include_uncensored: config.include_uncensored,
        }
    }
}
