//! HTTP server for the slash-command webhook

use log::info;
use shardbot::StreamAdmin;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::routes::create_router;

pub type AppState = Arc<AppStateInner>;

#[derive(Clone)]
pub struct AppStateInner {
    pub admin: Arc<dyn StreamAdmin>,
}

pub fn create_app_state(admin: Arc<dyn StreamAdmin>) -> AppState {
    Arc::new(AppStateInner { admin })
}

/// Serve the webhook on an already-bound listener until the process exits.
pub async fn serve(
    listener: TcpListener,
    admin: Arc<dyn StreamAdmin>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(create_app_state(admin));
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Webhook server failed: {e}"))?;
    Ok(())
}

pub async fn start_server(
    host: &str,
    port: u16,
    admin: Arc<dyn StreamAdmin>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = format!("{host}:{port}");
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| format!("Failed to bind to address {bind_address}: {e}"))?;
    info!("shardbot webhook listening on http://{bind_address}");
    serve(listener, admin).await
}
