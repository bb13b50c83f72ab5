//! End-of-run notifications.
//!
//! Delivery is fire-and-forget: a failing notifier is logged and never
//! changes the outcome of the run.

pub mod command;
pub mod webhook;

pub use command::CommandNotifier;
pub use webhook::WebhookNotifier;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::NotificationsConfig;
use crate::rename::{RunMode, RunReport};

/// What gets delivered to every notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub success: bool,
}

impl Notification {
    /// Summary of a finished run.
    pub fn from_report(report: &RunReport) -> Self {
        let title = match report.mode {
            RunMode::Preview => "namesmith: preview complete",
            RunMode::Execute => "namesmith: rename complete",
        };
        Self {
            title: title.to_string(),
            message: report.summary(),
            success: true,
        }
    }

    /// A run that could not start or aborted.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            title: "namesmith: rename failed".to_string(),
            message: message.into(),
            success: false,
        }
    }
}

/// A notification target.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    async fn send(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Manages all notification targets (desktop command, webhooks).
#[derive(Default)]
pub struct NotificationManager {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotificationManager {
    pub fn new(config: &NotificationsConfig) -> Self {
        let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();

        if let Some(notifier) = config.command.as_deref().and_then(CommandNotifier::new) {
            notifiers.push(Box::new(notifier));
        }

        notifiers.extend(
            config
                .webhooks
                .iter()
                .filter(|w| w.enabled)
                .map(|w| Box::new(WebhookNotifier::new(w)) as Box<dyn Notifier>),
        );

        Self { notifiers }
    }

    /// Add a notifier.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    /// Deliver to every target.
    /// This method is fire-and-forget - errors are logged but not propagated.
    pub async fn notify(&self, notification: &Notification) {
        if !self.has_targets() {
            tracing::debug!("No notification targets configured");
            return;
        }

        for notifier in &self.notifiers {
            match notifier.send(notification).await {
                Ok(()) => {
                    tracing::debug!("Notification sent via '{}'", notifier.name());
                }
                Err(e) => {
                    tracing::warn!("Failed to notify '{}': {:#}", notifier.name(), e);
                }
            }
        }
    }

    /// Check if there are any enabled notification targets
    pub fn has_targets(&self) -> bool {
        !self.notifiers.is_empty()
    }
}
