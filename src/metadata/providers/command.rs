//! Resolver that delegates each lookup to an external program.
//!
//! The program is invoked as `<command...> <IDENTIFIER> [--curated]
//! [--uncensored]` and must print one JSON document on stdout:
//!
//! ```json
//! {"status": 200, "result": {"title": "...", "performers": [{"name": "..."}]}}
//! ```
//!
//! `stars` is accepted as an alias for `performers`.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use namesmith_parser::Identifier;
use tracing::debug;

use crate::metadata::provider::{LookupPreferences, LookupResponse, MetadataResolver};
use crate::process::ToolCommand;

/// Runs a configured lookup program per identifier.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    command: ToolCommand,
}

impl CommandResolver {
    /// Create a resolver from an argv-style command (program first).
    pub fn new(argv: &[String], timeout: Duration) -> anyhow::Result<Self> {
        let mut command =
            ToolCommand::from_argv(argv).context("resolver command cannot be empty")?;
        command.timeout(timeout);
        Ok(Self { command })
    }

    fn invocation(&self, identifier: &Identifier, preferences: LookupPreferences) -> ToolCommand {
        let mut cmd = self.command.clone();
        cmd.arg(identifier.to_string());
        if preferences.prefer_curated {
            cmd.arg("--curated");
        }
        if preferences.include_uncensored {
            cmd.arg("--uncensored");
        }
        cmd
    }
}

#[async_trait]
impl MetadataResolver for CommandResolver {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn resolve(
        &self,
        identifier: &Identifier,
        preferences: LookupPreferences,
    ) -> anyhow::Result<LookupResponse> {
        let cmd = self.invocation(identifier, preferences);
        debug!(program = cmd.program(), %identifier, "running lookup command");

        let output = cmd.execute().await?;
        let response: LookupResponse = serde_json::from_str(output.stdout.trim())
            .with_context(|| format!("invalid JSON from {} for {identifier}", cmd.program()))?;

        Ok(response)
    }
}
