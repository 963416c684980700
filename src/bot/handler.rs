//! Per-event handling.
//!
//! Classifies one inbound event, builds the reply it calls for and sends
//! it. Each event gets at most one reply, and every collaborator failure is
//! caught here: a failed event reports a [`HandlingOutcome::Failed`] instead
//! of aborting its siblings in the same delivery.

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::line::client::{ApiError, MessagingApi};
use crate::line::events::InboundEvent;
use crate::line::messages::{OutboundMessage, SelectionPayload};

use super::classifier::{self, Intent};
use super::replies;

/// Quick-reply options offered by the quiz confirmation prompt:
/// `(label, selection key)`.
const CHOICE_OPTIONS: [(&str, &str); 2] = [("yes", "yes"), ("no", "no")];

/// Failure while acting on a single event.
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("profile lookup failed: {0}")]
    Profile(#[source] ApiError),

    #[error("reply delivery failed: {0}")]
    Reply(#[source] ApiError),

    #[error("event needs a reply but carries no reply token")]
    MissingReplyToken,
}

/// Which branch fired for an event, for logging and batch reporting.
#[derive(Debug)]
pub enum HandlingOutcome {
    /// Profile looked up and greeting sent.
    Greeted { user_id: String },

    /// Fixed acknowledgement sent.
    Acknowledged,

    /// Quiz confirmation prompt sent.
    ChoiceOffered,

    /// Postback processed. `selection` is `None` when the payload was
    /// malformed and got discarded. No reply is sent either way.
    SelectionRecorded { selection: Option<SelectionPayload> },

    /// No reaction defined for the event.
    Ignored,

    /// A collaborator failed; nothing more was attempted for this event.
    Failed { error: HandleError },
}

impl HandlingOutcome {
    /// Short branch name for structured logs.
    pub fn branch(&self) -> &'static str {
        match self {
            Self::Greeted { .. } => "greeted",
            Self::Acknowledged => "acknowledged",
            Self::ChoiceOffered => "choice_offered",
            Self::SelectionRecorded { .. } => "selection_recorded",
            Self::Ignored => "ignored",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Handle one inbound event to completion.
pub async fn handle_event<C: MessagingApi>(api: &C, event: &InboundEvent) -> HandlingOutcome {
    match classifier::classify(event) {
        Intent::Greet { user_id } => match greet(api, event, &user_id).await {
            Ok(()) => HandlingOutcome::Greeted { user_id },
            Err(error) => fail(error),
        },
        Intent::RespondEcho => {
            match send_reply(api, event, replies::acknowledgement()).await {
                Ok(()) => HandlingOutcome::Acknowledged,
                Err(error) => fail(error),
            }
        }
        Intent::OfferChoice { topic } => {
            let prompt = replies::choice_prompt(&topic, &CHOICE_OPTIONS);
            match send_reply(api, event, prompt).await {
                Ok(()) => HandlingOutcome::ChoiceOffered,
                Err(error) => fail(error),
            }
        }
        Intent::ProcessSelection { raw } => {
            let selection = match SelectionPayload::decode(&raw) {
                Ok(payload) => {
                    info!(action = ?payload.action(), "postback selection recorded");
                    Some(payload)
                }
                Err(err) => {
                    warn!(error = %err, raw = %raw, "discarding malformed postback payload");
                    None
                }
            };
            HandlingOutcome::SelectionRecorded { selection }
        }
        Intent::Ignore => HandlingOutcome::Ignored,
    }
}

async fn greet<C: MessagingApi>(
    api: &C,
    event: &InboundEvent,
    user_id: &str,
) -> Result<(), HandleError> {
    let profile = api.get_profile(user_id).await.map_err(HandleError::Profile)?;
    send_reply(api, event, replies::greeting(&profile.display_name)).await
}

async fn send_reply<C: MessagingApi>(
    api: &C,
    event: &InboundEvent,
    message: OutboundMessage,
) -> Result<(), HandleError> {
    let token = event.reply_token.as_deref().ok_or(HandleError::MissingReplyToken)?;
    debug!(body = message.body(), "sending reply");
    api.reply(token, message).await.map_err(HandleError::Reply)
}

fn fail(error: HandleError) -> HandlingOutcome {
    error!(error = %error, "event handling failed");
    HandlingOutcome::Failed { error }
}
