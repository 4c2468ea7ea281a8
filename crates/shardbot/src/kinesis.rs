//! Stream administration against Amazon Kinesis Data Streams.
//!
//! [`StreamAdmin`] is the seam between command handling and the AWS SDK, so the command
//! layer can be exercised against a test double.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, meta::region::RegionProviderChain};
use aws_sdk_kinesis::{error::DisplayErrorContext, types::ScalingType};
use tracing::debug;

use crate::error::ServiceError;

pub const DESCRIBE_STREAM_SUMMARY: &str = "DescribeStreamSummary";
pub const UPDATE_SHARD_COUNT: &str = "UpdateShardCount";

/// The subset of a stream description used for diagnostics and replies.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSummary {
    pub stream_name: String,
    pub stream_arn: String,
    pub stream_status: String,
    pub open_shard_count: i32,
    pub retention_period_hours: i32,
    pub consumer_count: Option<i32>,
}

/// Acknowledgement of an accepted rescale request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShardCountUpdate {
    pub stream_name: Option<String>,
    pub current_shard_count: Option<i32>,
    pub target_shard_count: Option<i32>,
}

/// Administrative operations on a data stream, addressed by stream name.
#[async_trait]
pub trait StreamAdmin: Send + Sync {
    async fn describe_stream_summary(&self, stream_name: &str)
    -> Result<StreamSummary, ServiceError>;

    /// Request a uniform rescale of `stream_name` to `target_shard_count` shards.
    async fn update_shard_count(
        &self,
        stream_name: &str,
        target_shard_count: i64,
    ) -> Result<ShardCountUpdate, ServiceError>;
}

/// Narrow a requested shard count to the 32-bit range `UpdateShardCount` accepts.
pub fn api_shard_count(target_shard_count: i64) -> Result<i32, ServiceError> {
    i32::try_from(target_shard_count).map_err(|_| {
        ServiceError::new(
            UPDATE_SHARD_COUNT,
            format!(
                "target shard count {target_shard_count} is outside the range accepted by {UPDATE_SHARD_COUNT}"
            ),
        )
    })
}

/// Where to find the Kinesis API. Unset fields fall back to the SDK's default provider chain.
#[derive(Debug, Clone, Default)]
pub struct KinesisConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

pub struct KinesisAdmin {
    client: aws_sdk_kinesis::Client,
}

impl KinesisAdmin {
    pub async fn connect(config: &KinesisConfig) -> KinesisAdmin {
        let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
            .or_default_provider();
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.as_str());
        }
        let sdk_config = loader.load().await;
        debug!(
            "Kinesis client configured (region: {:?}, endpoint: {:?})",
            sdk_config.region(),
            config.endpoint_url
        );
        KinesisAdmin {
            client: aws_sdk_kinesis::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl StreamAdmin for KinesisAdmin {
    async fn describe_stream_summary(
        &self,
        stream_name: &str,
    ) -> Result<StreamSummary, ServiceError> {
        let output = self
            .client
            .describe_stream_summary()
            .stream_name(stream_name)
            .send()
            .await
            .map_err(|err| {
                ServiceError::new(DESCRIBE_STREAM_SUMMARY, DisplayErrorContext(&err).to_string())
            })?;
        let summary = output.stream_description_summary().ok_or_else(|| {
            ServiceError::new(
                DESCRIBE_STREAM_SUMMARY,
                format!("no stream description summary returned for '{stream_name}'"),
            )
        })?;
        Ok(StreamSummary {
            stream_name: summary.stream_name().to_string(),
            stream_arn: summary.stream_arn().to_string(),
            stream_status: summary.stream_status().as_str().to_string(),
            open_shard_count: summary.open_shard_count(),
            retention_period_hours: summary.retention_period_hours(),
            consumer_count: summary.consumer_count(),
        })
    }

    async fn update_shard_count(
        &self,
        stream_name: &str,
        target_shard_count: i64,
    ) -> Result<ShardCountUpdate, ServiceError> {
        let target_shard_count = api_shard_count(target_shard_count)?;
        let output = self
            .client
            .update_shard_count()
            .stream_name(stream_name)
            .scaling_type(ScalingType::UniformScaling)
            .target_shard_count(target_shard_count)
            .send()
            .await
            .map_err(|err| {
                ServiceError::new(UPDATE_SHARD_COUNT, DisplayErrorContext(&err).to_string())
            })?;
        Ok(ShardCountUpdate {
            stream_name: output.stream_name().map(str::to_string),
            current_shard_count: output.current_shard_count(),
            target_shard_count: output.target_shard_count(),
        })
    }
}
