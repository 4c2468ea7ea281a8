//! Route configuration for the webhook API

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{metadata, server::AppState, webhook};

pub const WEBHOOK_PATH: &str = "/slack/commands";

/// Creates the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(webhook::slash_command))
        .route("/health", get(metadata::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
