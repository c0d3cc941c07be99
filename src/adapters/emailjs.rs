use crate::config::RelayConfig;
use crate::domain::model::{ContactMessage, RelayAck};
use crate::domain::ports::MessageRelay;
use crate::utils::error::RelayError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Request body of the EmailJS `email/send` endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

/// EmailJS REST binding. One request per `send`, no retry and no timeout.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
    client: Client,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn with_client(config: RelayConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

#[async_trait]
impl MessageRelay for EmailJsRelay {
    async fn send(&self, message: &ContactMessage) -> Result<RelayAck, RelayError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };

        tracing::debug!(
            "Making relay request to: {} (service: {}, template: {})",
            self.config.endpoint,
            self.config.service_id,
            self.config.template_id
        );
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);
        let body = response.text().await?;

        if status.is_success() {
            Ok(RelayAck {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
