//! Slash-command dispatch and the `/support` command.

use tracing::{error, info, warn};

use crate::arn::{is_arn, stream_name_from_arn};
use crate::error::{DecodeError, ShardbotError};
use crate::kinesis::StreamAdmin;
use crate::request::{self, SlashCommand};
use crate::response::Reply;

pub const SUPPORT_COMMAND: &str = "/support";
pub const CHANGE_SHARD: &str = "change-shard";

/// Validated arguments of `/support change-shard <arn> <count>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeShard {
    pub stream_arn: String,
    pub target_shard_count: i64,
}

impl ChangeShard {
    /// Validate the positional arguments.
    ///
    /// Checks run in a fixed order: the count must be an integer, then the sub-command
    /// must be `change-shard`, then the identifier must look like an ARN. Tokens past the
    /// third are ignored. The count is range-checked against the service's limits only
    /// when the rescale is requested.
    pub fn from_args(args: &[String]) -> Result<Self, ShardbotError> {
        let [subcommand, stream_arn, count, ..] = args else {
            return Err(ShardbotError::UnsupportedSubcommand {
                name: args.join(" "),
            });
        };

        let target_shard_count =
            count
                .parse::<i64>()
                .map_err(|source| ShardbotError::InvalidShardCount {
                    token: count.clone(),
                    source,
                })?;

        if subcommand != CHANGE_SHARD {
            return Err(ShardbotError::UnsupportedSubcommand {
                name: subcommand.clone(),
            });
        }

        if !is_arn(stream_arn) {
            return Err(ShardbotError::InvalidArn {
                arn: stream_arn.clone(),
            });
        }

        Ok(ChangeShard {
            stream_arn: stream_arn.clone(),
            target_shard_count,
        })
    }

    pub fn stream_name(&self) -> &str {
        stream_name_from_arn(&self.stream_arn)
    }
}

/// Run `/support` with its argument tokens, returning the pre-update open shard count.
#[tracing::instrument(level = "debug", skip(admin))]
pub async fn support_command(
    admin: &dyn StreamAdmin,
    args: &[String],
) -> Result<i32, ShardbotError> {
    let change = ChangeShard::from_args(args)?;
    let stream_name = change.stream_name();

    let summary = admin.describe_stream_summary(stream_name).await?;
    info!("Stream summary before rescale: {summary:?}");

    let update = admin
        .update_shard_count(stream_name, change.target_shard_count)
        .await?;
    info!(
        "Requested rescale of '{stream_name}' from {} to {} shards: {update:?}",
        summary.open_shard_count, change.target_shard_count
    );

    Ok(summary.open_shard_count)
}

/// Route a decoded slash command to its handler.
pub async fn dispatch(
    admin: &dyn StreamAdmin,
    command: &SlashCommand,
) -> Result<i32, ShardbotError> {
    match command.command.as_str() {
        SUPPORT_COMMAND => support_command(admin, &command.args).await,
        other => Err(ShardbotError::UnsupportedCommand {
            command: other.to_string(),
        }),
    }
}

/// Decode a raw webhook body and produce the reply. Never fails: every error is
/// rendered into the reply.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn handle_webhook(admin: &dyn StreamAdmin, body: &str) -> Reply {
    let command = match request::decode(body) {
        Ok(command) => command,
        Err(err) => {
            warn!("Failed to decode webhook body: {err}");
            return ShardbotError::from(err).into();
        }
    };
    match dispatch(admin, &command).await {
        Ok(count) => Reply::ShardCount(count),
        Err(err) => {
            if err.is_client_error() {
                warn!("{} {:?} rejected: {err}", command.command, command.args);
            } else {
                error!("{} {:?} failed: {err}", command.command, command.args);
            }
            err.into()
        }
    }
}

/// Same as [`handle_webhook`] for a body that has not been checked for UTF-8 yet.
pub async fn handle_webhook_bytes(admin: &dyn StreamAdmin, body: &[u8]) -> Reply {
    match std::str::from_utf8(body) {
        Ok(body) => handle_webhook(admin, body).await,
        Err(err) => {
            warn!("Webhook body is not valid UTF-8: {err}");
            ShardbotError::from(DecodeError::BodyNotUtf8 {
                valid_up_to: err.valid_up_to(),
            })
            .into()
        }
    }
}
