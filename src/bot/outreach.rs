//! Direct-send operations.
//!
//! Push and broadcast with fixed bodies, triggered by operational HTTP
//! requests rather than inbound events. Unlike the webhook path, failures
//! here surface to the caller — an operator deciding whether to retry needs
//! to see them.

use crate::line::client::{ApiError, MessagingApi};

use super::replies;

/// Body of the one-recipient push message.
pub const PUSH_NOTICE: &str = "プッシュ・メッセージです．";

/// Body of the all-recipients broadcast message.
pub const BROADCAST_NOTICE: &str = "ブロードキャスト・メッセージです．";

/// Push the fixed notice to a single user.
pub async fn push_notice<C: MessagingApi>(api: &C, user_id: &str) -> Result<(), ApiError> {
    api.push(user_id, replies::notice(PUSH_NOTICE)).await
}

/// Broadcast the fixed notice to every friend of the bot.
pub async fn broadcast_notice<C: MessagingApi>(api: &C) -> Result<(), ApiError> {
    api.broadcast(replies::notice(BROADCAST_NOTICE)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::test_api::FakeApi;

    #[tokio::test]
    async fn test_push_notice_targets_the_user() {
        let api = FakeApi::default();
        push_notice(&api, "U42").await.unwrap();

        let pushes = api.pushes();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].0, "U42");
        assert_eq!(pushes[0].1.body(), "プッシュ・メッセージです．");
    }

    #[tokio::test]
    async fn test_broadcast_notice_sends_exactly_once() {
        let api = FakeApi::default();
        broadcast_notice(&api).await.unwrap();

        let broadcasts = api.broadcasts();
        assert_eq!(broadcasts.len(), 1);
        assert_eq!(broadcasts[0].body(), "ブロードキャスト・メッセージです．");
    }

    #[tokio::test]
    async fn test_push_failure_surfaces_to_caller() {
        let api = FakeApi::default().failing_sends();
        assert!(push_notice(&api, "U42").await.is_err());
    }

    #[tokio::test]
    async fn test_broadcast_failure_surfaces_to_caller() {
        let api = FakeApi::default().failing_sends();
        assert!(broadcast_notice(&api).await.is_err());
    }
}
