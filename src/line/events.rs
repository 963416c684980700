//! Inbound webhook event model.
//!
//! Typed view of the JSON that LINE POSTs to the webhook endpoint. One
//! delivery carries a batch of events; each event is tagged by `type`.
//! Unknown event and message types decode into catch-all variants so a new
//! platform feature never fails a whole delivery.

use serde::Deserialize;

/// One webhook delivery: the batch of events LINE sends per invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookDelivery {
    /// Bot user ID the delivery is addressed to.
    #[serde(default)]
    pub destination: String,

    #[serde(default)]
    pub events: Vec<InboundEvent>,
}

/// A single inbound event.
///
/// The reply token permits exactly one synchronous reply and is only valid
/// for the current delivery cycle. Events that cannot be replied to
/// (e.g. unfollow) carry none.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEvent {
    #[serde(rename = "replyToken", default)]
    pub reply_token: Option<String>,

    #[serde(flatten)]
    pub kind: EventKind,
}

/// Event category, tagged by the `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventKind {
    /// A user added the bot as a friend.
    Follow { source: EventSource },

    /// A message was sent to the bot.
    Message { message: MessageContent },

    /// A user activated a quick-reply/postback action.
    Postback { postback: PostbackContent },

    /// Any event type this bot has no reaction for.
    #[serde(other)]
    Other,
}

/// Where an event originated. Group and room sources may omit the user ID.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventSource {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// Message payload, tagged by the `type` field. Only text is acted upon.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: String },

    /// Stickers, images, location shares and the rest.
    #[serde(other)]
    Unsupported,
}

/// Postback payload: the `data` string attached when the action was sent.
#[derive(Debug, Clone, Deserialize)]
pub struct PostbackContent {
    pub data: String,
}
