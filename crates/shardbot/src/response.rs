//! Reply bodies sent back to the chat platform.
//!
//! Every reply travels with status 200; failures are reported in-band as an ephemeral
//! message. A successful rescale replies with the bare shard count rather than an envelope.

use serde::{Deserialize, Serialize};

use crate::error::ShardbotError;

pub const REPLY_STATUS: u16 = 200;
pub const EPHEMERAL: &str = "ephemeral";

/// A chat message visible only to the invoking user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackErrorResponse {
    pub response_type: String,
    pub text: String,
}

impl SlackErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            response_type: EPHEMERAL.to_string(),
            text: format!("ERROR: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Open shard count of the stream as described before the rescale was requested.
    ShardCount(i32),
    Error(SlackErrorResponse),
}

impl Reply {
    pub fn status(&self) -> u16 {
        REPLY_STATUS
    }

    pub fn body(&self) -> String {
        match self {
            Reply::ShardCount(count) => count.to_string(),
            // Two string fields always serialize; the fallback keeps the message anyway.
            Reply::Error(envelope) => serde_json::to_string(envelope).unwrap_or_else(|_| {
                serde_json::json!({ "response_type": EPHEMERAL, "text": envelope.text })
                    .to_string()
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

impl From<ShardbotError> for Reply {
    fn from(err: ShardbotError) -> Self {
        Reply::Error(SlackErrorResponse::new(&err.to_string()))
    }
}

impl From<Result<i32, ShardbotError>> for Reply {
    fn from(result: Result<i32, ShardbotError>) -> Self {
        match result {
            Ok(count) => Reply::ShardCount(count),
            Err(err) => err.into(),
        }
    }
}
