use crate::test_utilities::{MockStreamAdmin, STREAM_ARN, TestClient, TestServer};
use shardbot::SlackErrorResponse;

#[tokio::test]
async fn test_change_shard_returns_pre_update_count() {
    // Setup
    let server = TestServer::start(MockStreamAdmin::new(2))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    // Action
    let response = helper
        .post_form(
            &server,
            "command=/support&text=change-shard%20arn:aws:kinesis:us-east-1:123456789012:stream/mystream%204",
        )
        .await
        .unwrap();

    // Expectation
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), "2");
    assert_eq!(server.admin.updates(), vec![("mystream".to_string(), 4)]);
}

#[tokio::test]
async fn test_unsupported_command_is_200_with_envelope() {
    let server = TestServer::start(MockStreamAdmin::new(2))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .post_form(&server, "command=%2Fdeploy&text=now")
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let envelope: SlackErrorResponse = response.json().await.unwrap();
    assert_eq!(envelope.response_type, "ephemeral");
    assert_eq!(envelope.text, "ERROR: unsupported command.");
    assert_eq!(server.admin.describe_count(), 0);
}

#[tokio::test]
async fn test_invalid_arn_is_reported() {
    let server = TestServer::start(MockStreamAdmin::new(2))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .post_form(&server, "command=/support&text=change-shard+stream%2Fmystream+4")
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let envelope: SlackErrorResponse = response.json().await.unwrap();
    assert_eq!(envelope.text, "ERROR: 'stream/mystream' is not a valid ARN.");
    assert_eq!(server.admin.describe_count(), 0);
}

#[tokio::test]
async fn test_describe_failure_is_reported() {
    let server = TestServer::start(MockStreamAdmin::failing_describe(
        "ResourceNotFoundException: Stream mystream not found",
    ))
    .await
    .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .post_form(
            &server,
            &format!("command=/support&text=change-shard+{STREAM_ARN}+4"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let envelope: SlackErrorResponse = response.json().await.unwrap();
    assert_eq!(
        envelope.text,
        "ERROR: ResourceNotFoundException: Stream mystream not found"
    );
    assert!(server.admin.updates().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_200_with_envelope() {
    let server = TestServer::start(MockStreamAdmin::new(2))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .post_form(&server, "command=/support&text=%G1")
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let envelope: SlackErrorResponse = response.json().await.unwrap();
    assert_eq!(envelope.text, "ERROR: invalid URL escape \"%G1\"");
}

#[tokio::test]
async fn test_body_accepted_without_form_content_type() {
    let server = TestServer::start(MockStreamAdmin::new(5))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .client
        .post(server.webhook_url())
        .body(format!("command=/support&text=change-shard+{STREAM_ARN}+6"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "5");
}

#[tokio::test]
async fn test_non_utf8_body_is_200_with_envelope() {
    let server = TestServer::start(MockStreamAdmin::new(2))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .post_form_bytes(&server, b"command=/support&text=\xff\xfe".to_vec())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let envelope: SlackErrorResponse = response.json().await.unwrap();
    assert_eq!(envelope.response_type, "ephemeral");
    assert_eq!(
        envelope.text,
        "ERROR: request body is not valid UTF-8 (invalid byte at offset 22)"
    );
    assert_eq!(server.admin.describe_count(), 0);
}

#[tokio::test]
async fn test_large_count_with_unknown_subcommand() {
    let server = TestServer::start(MockStreamAdmin::new(2))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .post_form(
            &server,
            &format!("command=/support&text=merge-shard+{STREAM_ARN}+99999999999"),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let envelope: SlackErrorResponse = response.json().await.unwrap();
    assert_eq!(envelope.text, "ERROR: 'merge-shard' is not a valid command.");
    assert_eq!(server.admin.describe_count(), 0);
}

