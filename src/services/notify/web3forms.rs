use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Notification, NotificationRelay};

/// Forwards bookings to the Web3Forms email relay.
pub struct Web3FormsRelay {
    access_key: String,
    url: String,
    client: reqwest::Client,
}

impl Web3FormsRelay {
    pub fn new(access_key: String, url: String) -> Self {
        Self {
            access_key,
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    notification: &'a Notification,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

#[async_trait]
impl NotificationRelay for Web3FormsRelay {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        let body = SubmitRequest {
            access_key: &self.access_key,
            notification,
        };

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .context("failed to call Web3Forms")?;

        let status = resp.status();
        let ack: SubmitResponse = resp
            .json()
            .await
            .context("failed to parse Web3Forms response")?;

        if !status.is_success() || !ack.success {
            anyhow::bail!("Web3Forms rejected submission ({}): {}", status, ack.message);
        }

        Ok(())
    }
}
