//! Slash-command webhook handler

use super::server::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use log::{debug, trace};

/// Accepts the raw body regardless of content type or encoding. The reply status is
/// always 200; failures, including a body that is not UTF-8, are carried in the JSON body.
pub async fn slash_command(State(app_state): State<AppState>, body: Bytes) -> impl IntoResponse {
    trace!("POST /slack/commands ({} bytes)", body.len());
    let reply = shardbot::handle_webhook_bytes(app_state.admin.as_ref(), &body).await;
    if reply.is_error() {
        debug!("POST /slack/commands replied with error: {}", reply.body());
    }
    let status = StatusCode::from_u16(reply.status()).unwrap_or(StatusCode::OK);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body(),
    )
}
