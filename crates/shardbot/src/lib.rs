//! Rescale Kinesis data streams from a chat slash command.
//!
//! The webhook body is decoded by [`request`], routed by [`command::dispatch`] and turned
//! into a [`Reply`] that is always delivered with status 200.

pub mod arn;
pub mod command;
pub mod error;
pub mod kinesis;
pub mod request;
pub mod response;
pub mod telemetry;

pub use command::{dispatch, handle_webhook, handle_webhook_bytes, support_command};
pub use error::{DecodeError, ServiceError, ShardbotError};
pub use kinesis::{KinesisAdmin, KinesisConfig, ShardCountUpdate, StreamAdmin, StreamSummary};
pub use request::{FormFields, SlashCommand};
pub use response::{Reply, SlackErrorResponse};
