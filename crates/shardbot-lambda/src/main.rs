//! AWS Lambda host for the slash-command webhook, fronted by API Gateway.

use aws_lambda_events::{
    apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse},
    encodings::Body,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use shardbot::{KinesisAdmin, KinesisConfig, StreamAdmin, telemetry};
use tracing::debug;

/// Run one API Gateway proxy event through the webhook. A missing body is decoded as an
/// empty form.
pub async fn handler(
    admin: &dyn StreamAdmin,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    debug!(request_id = %event.context.request_id, "Received slash command");
    let body = event.payload.body.unwrap_or_default();
    let reply = shardbot::handle_webhook(admin, &body).await;
    Ok(ApiGatewayProxyResponse {
        status_code: i64::from(reply.status()),
        body: Some(Body::Text(reply.body())),
        ..Default::default()
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_plain();
    let admin = KinesisAdmin::connect(&KinesisConfig::default()).await;
    let admin = &admin;
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            handler(admin, event).await
        },
    ))
    .await
}
