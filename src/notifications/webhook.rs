//! JSON webhook notifications.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{Notification, Notifier};
use crate::config::WebhookConfig;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// POSTs every notification as `{"title", "message", "success"}`.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    name: String,
}

impl WebhookNotifier {
    pub fn new(config: &WebhookConfig) -> Self {
        let client = Client::builder()
            .timeout(CONNECTION_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            url: config.url.clone(),
            name: config.name.clone(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn name(&self) -> &str {
        &self.name
    }

    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(notification)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Webhook '{}' failed ({}): {}", self.name, status, body);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn notifier(server: &MockServer) -> WebhookNotifier {
        WebhookNotifier::new(&WebhookConfig {
            name: "test".to_string(),
            url: format!("{}/hook", server.uri()),
            enabled: true,
        })
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_json(serde_json::json!({
                "title": "namesmith: rename failed",
                "message": "Directory '/x' does not exist",
                "success": false
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        notifier(&server)
            .send(&Notification::failure("Directory '/x' does not exist"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("down"))
            .mount(&server)
            .await;

        let err = notifier(&server)
            .send(&Notification::failure("x"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
