//! Outbound message model.
//!
//! Immutable payloads serialized into LINE message objects. Quick-reply
//! postback actions carry a [`SelectionPayload`] encoding in `data`; the
//! platform echoes that string back verbatim inside a future postback
//! event, where the handler decodes it again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A message to send. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text {
        text: String,

        #[serde(rename = "quickReply", skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },
}

impl OutboundMessage {
    /// Plain text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), quick_reply: None }
    }

    /// Text message with quick-reply items attached below it.
    pub fn text_with_choices(text: impl Into<String>, items: Vec<QuickReplyItem>) -> Self {
        let quick_reply = if items.is_empty() { None } else { Some(QuickReply { items }) };
        Self::Text { text: text.into(), quick_reply }
    }

    /// The message body.
    pub fn body(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
        }
    }

    /// Attached quick-reply items, empty when none were attached.
    pub fn choices(&self) -> &[QuickReplyItem] {
        match self {
            Self::Text { quick_reply, .. } => {
                quick_reply.as_ref().map(|q| q.items.as_slice()).unwrap_or(&[])
            }
        }
    }
}

/// The quick-reply container LINE expects under `quickReply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub items: Vec<QuickReplyItem>,
}

/// One interactive chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuickReplyItem {
    Action { action: QuickReplyAction },
}

impl QuickReplyItem {
    /// Postback chip: tapping it produces a postback event carrying `data`.
    pub fn postback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Action {
            action: QuickReplyAction::Postback { label: label.into(), data: data.into() },
        }
    }

    /// The `data` string this chip would echo back, for inspection.
    pub fn data(&self) -> &str {
        match self {
            Self::Action { action: QuickReplyAction::Postback { data, .. } } => data,
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Action { action: QuickReplyAction::Postback { label, .. } } => label,
        }
    }
}

/// The action inside a quick-reply item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuickReplyAction {
    Postback { label: String, data: String },
}

/// Structured data embedded in postback `data` fields.
///
/// A plain string-to-string map, JSON-encoded on the wire. Everything this
/// bot attaches to a quick-reply action is produced by [`encode`] and is
/// guaranteed to come back through [`decode`].
///
/// [`encode`]: SelectionPayload::encode
/// [`decode`]: SelectionPayload::decode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionPayload(BTreeMap<String, String>);

impl SelectionPayload {
    /// Payload carrying a single `action` key, as attached by choice prompts.
    pub fn for_action(key: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert("action".to_string(), key.into());
        Self(map)
    }

    /// JSON-encode for the wire.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("a map of strings serializes")
    }

    /// Decode a raw postback `data` string. Fails on anything that is not a
    /// JSON object of strings.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The selected action key, when present.
    pub fn action(&self) -> Option<&str> {
        self.get("action")
    }
}
