//! Builder for executing external programs with timeout support.
//!
//! Both the metadata lookup command and the desktop notifier are external
//! programs; this is the single place that spawns them.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use namesmith_common::{Error, Result};
use tokio::process::Command;

/// Default command timeout: 1 minute.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Output captured from a program execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// A builder for constructing and executing external program invocations.
///
/// # Example
///
/// ```no_run
/// use namesmith::process::ToolCommand;
///
/// # async fn example() -> namesmith_common::Result<()> {
/// let output = ToolCommand::new("jvav-lookup")
///     .arg("ZRK-002")
///     .execute()
///     .await?;
/// println!("{}", output.stdout);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ToolCommand {
    /// Create a new command for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a command from an argv-style list (program first).
    ///
    /// Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, rest) = argv.split_first()?;
        let mut cmd = Self::new(program.clone());
        cmd.args(rest.iter().cloned());
        Some(cmd)
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl Into<String>) -> &mut Self {
        self.args.push(s.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Set the maximum execution time.
    pub fn timeout(&mut self, d: Duration) -> &mut Self {
        self.timeout = d;
        self
    }

    /// The program name as it will be invoked.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Execute the command, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tool`] if spawning fails, the process times out, or it
    /// exits with a non-zero status (the message then includes stderr).
    pub async fn execute(&self) -> Result<ToolOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| self.error(format!("failed to spawn: {e}")))?;

        // On timeout the future is dropped and kill_on_drop reaps the child.
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(self.error(format!("I/O error waiting for process: {e}"))),
            Err(_elapsed) => return Err(self.error(format!("timed out after {:?}", self.timeout))),
        };

        let tool_output = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            return Err(self.error(format!(
                "exited with status {}: {}",
                output.status,
                tool_output.stderr.trim()
            )));
        }

        Ok(tool_output)
    }

    fn error(&self, message: String) -> Error {
        Error::Tool {
            tool: self.program.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn execute_echo() {
        let output = ToolCommand::new("echo").arg("hello").execute().await;

        match output {
            Ok(out) => {
                assert!(out.status.success());
                assert!(out.stdout.trim().contains("hello"));
            }
            Err(_) => {
                // On some minimal environments echo may not exist; skip.
            }
        }
    }

    #[tokio::test]
    async fn execute_nonexistent_tool() {
        let result = ToolCommand::new("nonexistent_tool_xyz_12345").execute().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn timeout_fires() {
        let result = ToolCommand::new("sleep")
            .arg("10")
            .timeout(Duration::from_millis(100))
            .execute()
            .await;
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("timed out"), "unexpected error: {err}");
    }

    #[test]
    fn from_argv_splits_program() {
        let argv = vec!["notify-send".to_string(), "-u".to_string(), "low".to_string()];
        let cmd = ToolCommand::from_argv(&argv).unwrap();
        assert_eq!(cmd.program(), "notify-send");
        assert_eq!(cmd.args, vec!["-u", "low"]);

        assert!(ToolCommand::from_argv(&[]).is_none());
    }
}
