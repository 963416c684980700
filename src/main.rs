//! Kotori - Webhook-driven LINE Bot
//!
//! Greets new followers, answers trigger phrases, offers quick-reply quiz
//! prompts, and exposes operational push/broadcast endpoints.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `line` - LINE Messaging API integration (events, messages, client, signature)
//! - `bot` - Event pipeline (classifier, handler, dispatcher) and webhook server
//!
//! The LINE client is constructed once here and injected; nothing in the
//! pipeline reaches for process-wide state.

mod bot;
mod config;
mod line;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use line::LineClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kotori=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting Kotori bot...");

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded successfully");

    // Initialize the LINE Messaging API client
    let api = Arc::new(LineClient::new(config.channel_token.clone()));
    info!("LINE client initialized");

    // Serve webhook and operational routes until shutdown
    bot::webhook::serve(&config, api).await
}
