//! Bot module - the event pipeline.
//!
//! Webhook deliveries flow: `webhook` → `dispatcher` → `handler` →
//! `classifier` → `replies` → the injected Messaging API client. The
//! `outreach` operations skip the pipeline and send directly.

pub mod classifier;
pub mod dispatcher;
pub mod handler;
pub mod outreach;
pub mod replies;
pub mod webhook;

pub use dispatcher::AppState;
pub use handler::HandlingOutcome;

/// Recording double for the Messaging API, shared by the pipeline tests.
#[cfg(test)]
pub(crate) mod test_api {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::line::client::{ApiError, MessagingApi, Profile};
    use crate::line::messages::OutboundMessage;

    #[derive(Default)]
    pub struct FakeApi {
        profile_calls: Mutex<Vec<String>>,
        replies: Mutex<Vec<(String, OutboundMessage)>>,
        pushes: Mutex<Vec<(String, OutboundMessage)>>,
        broadcasts: Mutex<Vec<OutboundMessage>>,
        fail_profile: bool,
        fail_sends: bool,
        fail_token: Option<String>,
    }

    impl FakeApi {
        /// Every profile lookup fails.
        pub fn failing_profile(mut self) -> Self {
            self.fail_profile = true;
            self
        }

        /// Every send (reply/push/broadcast) fails.
        pub fn failing_sends(mut self) -> Self {
            self.fail_sends = true;
            self
        }

        /// Only replies for this token fail.
        pub fn failing_sends_for_token(mut self, token: &str) -> Self {
            self.fail_token = Some(token.to_string());
            self
        }

        pub fn profile_calls(&self) -> Vec<String> {
            self.profile_calls.lock().unwrap().clone()
        }

        pub fn replies(&self) -> Vec<(String, OutboundMessage)> {
            self.replies.lock().unwrap().clone()
        }

        pub fn pushes(&self) -> Vec<(String, OutboundMessage)> {
            self.pushes.lock().unwrap().clone()
        }

        pub fn broadcasts(&self) -> Vec<OutboundMessage> {
            self.broadcasts.lock().unwrap().clone()
        }

        fn refused() -> ApiError {
            ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "fake failure".to_string(),
            }
        }
    }

    #[async_trait]
    impl MessagingApi for FakeApi {
        async fn get_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
            self.profile_calls.lock().unwrap().push(user_id.to_string());
            if self.fail_profile {
                return Err(Self::refused());
            }
            Ok(Profile { display_name: "表示名".to_string() })
        }

        async fn reply(
            &self,
            reply_token: &str,
            message: OutboundMessage,
        ) -> Result<(), ApiError> {
            if self.fail_sends || self.fail_token.as_deref() == Some(reply_token) {
                return Err(Self::refused());
            }
            self.replies.lock().unwrap().push((reply_token.to_string(), message));
            Ok(())
        }

        async fn push(&self, user_id: &str, message: OutboundMessage) -> Result<(), ApiError> {
            if self.fail_sends {
                return Err(Self::refused());
            }
            self.pushes.lock().unwrap().push((user_id.to_string(), message));
            Ok(())
        }

        async fn broadcast(&self, message: OutboundMessage) -> Result<(), ApiError> {
            if self.fail_sends {
                return Err(Self::refused());
            }
            self.broadcasts.lock().unwrap().push(message);
            Ok(())
        }
    }
}
