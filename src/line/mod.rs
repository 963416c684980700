//! LINE platform integration: webhook event model, outbound message model,
//! signature verification and the Messaging API client.

pub mod client;
pub mod events;
pub mod messages;
pub mod signature;

pub use client::{ApiError, LineClient, MessagingApi, Profile};
pub use events::{EventKind, InboundEvent, MessageContent, WebhookDelivery};
pub use messages::{OutboundMessage, QuickReplyItem, SelectionPayload};
