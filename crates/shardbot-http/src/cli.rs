//! Command-line configuration for the webhook server

use clap::Parser;
use shardbot::KinesisConfig;

#[derive(Parser, Debug)]
#[command(
    name = "shardbot-server",
    version,
    about = "Slash-command webhook that rescales Kinesis streams"
)]
pub struct Args {
    /// Bind address (IP or hostname)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// AWS region; defaults to the environment/profile configuration
    #[arg(long)]
    pub region: Option<String>,

    /// Override the Kinesis endpoint (e.g. a local emulator)
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

impl Args {
    pub fn kinesis_config(&self) -> KinesisConfig {
        KinesisConfig {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
