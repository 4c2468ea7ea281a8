//! HTTP front end for the shardbot slash-command webhook.

pub mod cli;
pub mod metadata;
pub mod routes;
pub mod server;
pub mod webhook;

pub use metadata::HealthCheckResponse;
pub use routes::{WEBHOOK_PATH, create_router};
pub use server::{AppState, AppStateInner, create_app_state, serve, start_server};
