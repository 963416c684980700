//! Reply builders.
//!
//! Pure construction of outbound messages, no I/O. Handlers decide *when*
//! to send; these decide *what* gets sent.

use crate::line::messages::{OutboundMessage, QuickReplyItem, SelectionPayload};

/// First-contact greeting, personalized with the looked-up display name.
pub fn greeting(display_name: &str) -> OutboundMessage {
    OutboundMessage::text(format!("{display_name}さん、はじめまして！"))
}

/// Fixed acknowledgement for the greeting trigger phrase.
pub fn acknowledgement() -> OutboundMessage {
    OutboundMessage::text("これはこれは")
}

/// Confirmation prompt for `topic` with one postback chip per
/// `(label, selection_key)`, in input order. Each chip's `data` is the
/// [`SelectionPayload`] encoding of `{action: selection_key}`.
pub fn choice_prompt(topic: &str, options: &[(&str, &str)]) -> OutboundMessage {
    let items = options
        .iter()
        .map(|(label, key)| {
            QuickReplyItem::postback(*label, SelectionPayload::for_action(*key).encode())
        })
        .collect();

    OutboundMessage::text_with_choices(format!("{topic}を始めますか？"), items)
}

/// Fixed-body message for the direct-send operations.
pub fn notice(body: &str) -> OutboundMessage {
    OutboundMessage::text(body)
}
