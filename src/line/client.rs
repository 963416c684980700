//! LINE Messaging API client.
//!
//! [`MessagingApi`] is the seam the event pipeline talks through; the tests
//! substitute a recording double. [`LineClient`] is the real thing: a thin
//! reqwest wrapper over the reply/push/broadcast/profile endpoints.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::messages::OutboundMessage;

const LINE_API_BASE: &str = "https://api.line.me/v2/bot";

/// Failure talking to the LINE API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to LINE API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("LINE API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// A user's profile as returned by `GET /profile/{userId}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Outbound capabilities of the LINE platform.
///
/// `reply` consumes a single-use reply token; the other sends are
/// token-free. All methods are stateless and safe to call concurrently.
#[async_trait]
pub trait MessagingApi: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Profile, ApiError>;

    async fn reply(&self, reply_token: &str, message: OutboundMessage) -> Result<(), ApiError>;

    async fn push(&self, user_id: &str, message: OutboundMessage) -> Result<(), ApiError>;

    async fn broadcast(&self, message: OutboundMessage) -> Result<(), ApiError>;
}

/// reqwest-backed [`MessagingApi`] implementation.
pub struct LineClient {
    base_url: String,
    channel_token: String,
    client: reqwest::Client,
}

impl LineClient {
    pub fn new(channel_token: impl Into<String>) -> Self {
        Self::with_base_url(channel_token, LINE_API_BASE)
    }

    /// Point the client at a different API host (used by tests).
    pub fn with_base_url(channel_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            channel_token: channel_token.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.channel_token)
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(())
    }
}

#[async_trait]
impl MessagingApi for LineClient {
    async fn get_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let url = format!("{}/profile/{}", self.base_url, user_id);
        let res = self.client.get(&url).bearer_auth(&self.channel_token).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(res.json().await?)
    }

    async fn reply(&self, reply_token: &str, message: OutboundMessage) -> Result<(), ApiError> {
        let body = serde_json::json!({
            "replyToken": reply_token,
            "messages": [message],
        });
        self.post_json("/message/reply", &body).await
    }

    async fn push(&self, user_id: &str, message: OutboundMessage) -> Result<(), ApiError> {
        let body = serde_json::json!({
            "to": user_id,
            "messages": [message],
        });
        self.post_json("/message/push", &body).await
    }

    async fn broadcast(&self, message: OutboundMessage) -> Result<(), ApiError> {
        let body = serde_json::json!({
            "messages": [message],
        });
        self.post_json("/message/broadcast", &body).await
    }
}
