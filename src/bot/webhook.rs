//! Webhook server.
//!
//! axum HTTP surface of the bot:
//! - `POST /bot/webhook` — LINE webhook deliveries (signature-checked)
//! - `GET /message/:id` — push the fixed notice to one user
//! - `GET /broadcast` — broadcast the fixed notice
//! - `GET /` — health check
//!
//! The webhook route always acknowledges a verified delivery with 200, even
//! when individual events inside it failed — per-event failures are data in
//! the response body, not transport errors.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::line::client::LineClient;
use crate::line::events::WebhookDelivery;
use crate::line::signature;

use super::dispatcher::{self, AppState};
use super::outreach;

/// Bind the HTTP server and serve until ctrl-c.
pub async fn serve(config: &Config, api: Arc<LineClient>) -> anyhow::Result<()> {
    let state = AppState::new(api, config.channel_secret.clone());
    let app = router(state);

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(address).await?;
    info!("📡 Listening on: {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/broadcast", get(broadcast_route))
        .route("/message/:id", get(push_route))
        .route("/bot/webhook", post(webhook_route))
        .with_state(state)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Connected successfully",
    }))
}

async fn broadcast_route(State(state): State<AppState>) -> impl IntoResponse {
    match outreach::broadcast_notice(state.api.as_ref()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Broadcast completed successfully",
            })),
        ),
        Err(err) => {
            error!(error = %err, "broadcast failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"status": "error"})))
        }
    }
}

async fn push_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match outreach::push_notice(state.api.as_ref(), &id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": format!("Push message for ID:{id} completed successfully"),
            })),
        ),
        Err(err) => {
            error!(error = %err, user_id = %id, "push failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"status": "error"})))
        }
    }
}

async fn webhook_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let received = headers
        .get("X-Line-Signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !signature::validate(&state.channel_secret, &body, received) {
        warn!("rejected webhook request: invalid signature");
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let delivery: WebhookDelivery = match serde_json::from_slice(&body) {
        Ok(d) => d,
        Err(err) => {
            error!(error = %err, "failed to parse webhook body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    debug!(
        destination = %delivery.destination,
        events = delivery.events.len(),
        "webhook delivery received"
    );

    let outcomes = dispatcher::dispatch_all(state.api.as_ref(), &delivery.events).await;
    let results: Vec<&str> = outcomes.iter().map(|o| o.branch()).collect();

    Json(json!({
        "status": "success",
        "results": results,
    }))
    .into_response()
}
