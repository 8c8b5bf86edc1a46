//! Webhook HTTP server: Telegram POSTs updates here; each request is dispatched independently.

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use command_router::UpdateDispatcher;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Header Telegram uses to echo the secret given to setWebhook.
pub const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// Shared state for the webhook routes. `dispatcher` is None when the bot token is missing.
#[derive(Clone)]
pub struct WebhookState {
    dispatcher: Option<Arc<UpdateDispatcher>>,
    secret: Option<String>,
}

impl WebhookState {
    pub fn new(dispatcher: Option<Arc<UpdateDispatcher>>, secret: Option<String>) -> Self {
        Self { dispatcher, secret }
    }

    pub fn is_configured(&self) -> bool {
        self.dispatcher.is_some()
    }
}

/// `POST /` and `POST /api/webhook` take updates; `GET /` is a health probe.
pub fn webhook_router(state: WebhookState) -> Router {
    Router::new()
        .route("/", get(health).post(telegram_webhook))
        .route("/api/webhook", post(telegram_webhook))
        .with_state(state)
}

/// 200 for every processed payload (ignored updates and handler failures included),
/// 400 for malformed payloads, 403 for a wrong secret, 500 when the token is missing (checked first).
async fn telegram_webhook(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let Some(dispatcher) = state.dispatcher.as_ref() else {
        error!("TELEGRAM_BOT_TOKEN not set; cannot dispatch update");
        return StatusCode::INTERNAL_SERVER_ERROR;
    };

    if let Some(ref expected) = state.secret {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if provided != expected.as_str() {
            warn!("Webhook request with missing or wrong secret token");
            return StatusCode::FORBIDDEN;
        }
    }

    match dispatcher.dispatch_body(&body).await {
        Ok(outcome) => {
            info!(outcome = ?outcome, "Webhook update processed");
            StatusCode::OK
        }
        Err(e) if e.is_client_error() => {
            warn!(error = %e, "Rejected malformed webhook payload");
            StatusCode::BAD_REQUEST
        }
        Err(e) => {
            error!(error = %e, "Webhook dispatch failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn health(State(state): State<WebhookState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "configured": state.is_configured(),
    }))
}

/// Binds `bind_addr` and serves the webhook routes until Ctrl+C or SIGTERM.
#[instrument(skip(state))]
pub async fn serve_webhook(bind_addr: &str, state: WebhookState) -> Result<()> {
    if !state.is_configured() {
        error!("TELEGRAM_BOT_TOKEN not set; every webhook request will fail with 500");
    }

    let app = webhook_router(state);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding to {}", bind_addr))?;
    info!(bind_addr = %bind_addr, "Webhook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("webhook server exited")?;
    info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
