//! Configuration module for the Kotori bot.
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// LINE channel access token for the Messaging API.
    pub channel_token: String,

    /// LINE channel secret, used to verify webhook signatures.
    pub channel_secret: String,

    /// HTTP port the webhook server listens on.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if required environment variables are not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        Self {
            channel_token: env::var("LINE_ACCESS_TOKEN").expect("LINE_ACCESS_TOKEN must be set"),
            channel_secret: env::var("LINE_CHANNEL_SECRET")
                .expect("LINE_CHANNEL_SECRET must be set"),
            port,
        }
    }
}
