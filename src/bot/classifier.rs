//! Event classification.
//!
//! The bot's whole decision table lives here as one total match: every
//! inbound event maps to exactly one [`Intent`], with an explicit `Ignore`
//! for everything the bot has no reaction for. Trigger phrases match
//! exactly — case-sensitive, no trimming.

use crate::line::events::{EventKind, InboundEvent, MessageContent};

/// Text that triggers the fixed acknowledgement reply.
pub const GREETING_TRIGGER: &str = "こんにちは";

/// Text that triggers the quiz confirmation prompt.
pub const QUIZ_TRIGGER: &str = "クイズ";

/// What the bot decided to do about one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Look up the new follower's profile and greet them.
    Greet { user_id: String },

    /// Send the fixed acknowledgement.
    RespondEcho,

    /// Offer a yes/no confirmation prompt for `topic`.
    OfferChoice { topic: String },

    /// Decode a postback selection payload.
    ProcessSelection { raw: String },

    /// No reaction defined.
    Ignore,
}

/// Classify one event. Pure and total.
pub fn classify(event: &InboundEvent) -> Intent {
    match &event.kind {
        EventKind::Follow { source } => match &source.user_id {
            Some(user_id) => Intent::Greet { user_id: user_id.clone() },
            // Follow events always carry a user ID; a source without one
            // (group/room shapes) has nobody to greet.
            None => Intent::Ignore,
        },
        EventKind::Message { message } => match message {
            MessageContent::Text { text } if text == GREETING_TRIGGER => Intent::RespondEcho,
            MessageContent::Text { text } if text == QUIZ_TRIGGER => {
                Intent::OfferChoice { topic: text.clone() }
            }
            MessageContent::Text { .. } | MessageContent::Unsupported => Intent::Ignore,
        },
        EventKind::Postback { postback } => Intent::ProcessSelection { raw: postback.data.clone() },
        EventKind::Other => Intent::Ignore,
    }
}
