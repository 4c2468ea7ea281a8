//! shardbot webhook server binary

use clap::Parser;
use shardbot::{KinesisAdmin, telemetry};
use shardbot_http::{cli::Args, start_server};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();
    let args = Args::parse();
    let admin = KinesisAdmin::connect(&args.kinesis_config()).await;
    start_server(&args.host, args.port, Arc::new(admin)).await
}
