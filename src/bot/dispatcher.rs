//! Batch dispatch.
//!
//! One webhook delivery carries a batch of independent events. They are
//! handled concurrently, but outcomes come back in input order — correlated
//! by position, not completion. A failed event never takes its siblings
//! down, and the batch as a whole always completes.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::line::client::{LineClient, MessagingApi};
use crate::line::events::InboundEvent;

use super::handler::{self, HandlingOutcome};

/// Shared application state, injected into the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    /// LINE API client shared by the webhook path and the direct sends.
    pub api: Arc<LineClient>,

    /// Channel secret for webhook signature verification.
    pub channel_secret: String,
}

impl AppState {
    pub fn new(api: Arc<LineClient>, channel_secret: impl Into<String>) -> Self {
        Self { api, channel_secret: channel_secret.into() }
    }
}

/// Handle every event of a delivery, concurrently, yielding one outcome per
/// event in input order.
pub async fn dispatch_all<C: MessagingApi>(
    api: &C,
    events: &[InboundEvent],
) -> Vec<HandlingOutcome> {
    let outcomes = join_all(events.iter().map(|event| handler::handle_event(api, event))).await;

    for (index, outcome) in outcomes.iter().enumerate() {
        debug!(index, branch = outcome.branch(), "event handled");
    }
    let failures = outcomes.iter().filter(|o| o.is_failure()).count();
    if failures > 0 {
        warn!(total = outcomes.len(), failures, "delivery handled with failures");
    } else {
        debug!(total = outcomes.len(), "delivery handled");
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::test_api::FakeApi;
    use crate::line::events::{EventKind, MessageContent, PostbackContent};

    fn text_event(token: &str, text: &str) -> InboundEvent {
        InboundEvent {
            reply_token: Some(token.to_string()),
            kind: EventKind::Message {
                message: MessageContent::Text { text: text.to_string() },
            },
        }
    }

    fn postback_event(data: &str) -> InboundEvent {
        InboundEvent {
            reply_token: Some("rt".to_string()),
            kind: EventKind::Postback { postback: PostbackContent { data: data.to_string() } },
        }
    }

    #[tokio::test]
    async fn test_one_outcome_per_event_in_input_order() {
        let api = FakeApi::default();
        let events = vec![
            text_event("rt-0", "こんにちは"),
            text_event("rt-1", "無関係"),
            postback_event(r#"{"action":"no"}"#),
            text_event("rt-3", "クイズ"),
        ];

        let outcomes = dispatch_all(&api, &events).await;

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].branch(), "acknowledged");
        assert_eq!(outcomes[1].branch(), "ignored");
        assert_eq!(outcomes[2].branch(), "selection_recorded");
        assert_eq!(outcomes[3].branch(), "choice_offered");
    }

    #[tokio::test]
    async fn test_one_failing_event_does_not_abort_the_batch() {
        // Sends fail only for the middle event's reply token.
        let api = FakeApi::default().failing_sends_for_token("rt-1");
        let events = vec![
            text_event("rt-0", "こんにちは"),
            text_event("rt-1", "こんにちは"),
            text_event("rt-2", "こんにちは"),
        ];

        let outcomes = dispatch_all(&api, &events).await;

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_failure());
        assert!(outcomes[1].is_failure());
        assert!(!outcomes[2].is_failure());
        assert_eq!(api.replies().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_delivery_yields_empty_outcomes() {
        let api = FakeApi::default();
        let outcomes = dispatch_all(&api, &[]).await;
        assert!(outcomes.is_empty());
    }
}
