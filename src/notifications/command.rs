//! Desktop notifications through an external program.

use std::time::Duration;

use async_trait::async_trait;

use super::{Notification, Notifier};
use crate::process::ToolCommand;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs a configured program once per notification.
///
/// `{title}` and `{message}` in any argument are replaced with the
/// notification text, e.g.
/// `["notify-send", "{title}", "{message}"]`.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    argv: Vec<String>,
}

impl CommandNotifier {
    /// Returns `None` for an empty argv.
    pub fn new(argv: &[String]) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        Some(Self {
            argv: argv.to_vec(),
        })
    }

    fn command(&self, notification: &Notification) -> Option<ToolCommand> {
        let argv: Vec<String> = self
            .argv
            .iter()
            .map(|arg| {
                arg.replace("{title}", &notification.title)
                    .replace("{message}", &notification.message)
            })
            .collect();

        let mut command = ToolCommand::from_argv(&argv)?;
        command.timeout(NOTIFY_TIMEOUT);
        Some(command)
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    fn name(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or("command")
    }

    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        let Some(command) = self.command(notification) else {
            anyhow::bail!("empty notification command");
        };
        command.execute().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        assert!(CommandNotifier::new(&[]).is_none());
    }

    #[tokio::test]
    async fn test_placeholders_substituted() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let script = format!("printf '%s|%s' \"$1\" \"$2\" > '{}'", out.display());

        let notifier =
            CommandNotifier::new(&argv(&["sh", "-c", &script, "sh", "[{title}]", "{message}!"]))
                .unwrap();
        notifier
            .send(&Notification::failure("Directory 'x' does not exist"))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            "[namesmith: rename failed]|Directory 'x' does not exist!"
        );
    }

    #[tokio::test]
    async fn test_failing_program_is_error() {
        let notifier = CommandNotifier::new(&argv(&["sh", "-c", "exit 3"])).unwrap();
        assert!(notifier.send(&Notification::failure("x")).await.is_err());
    }
}
