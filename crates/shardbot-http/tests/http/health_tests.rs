use crate::test_utilities::{MockStreamAdmin, TestClient, TestServer};

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(MockStreamAdmin::new(1))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper.health_check(&server).await.unwrap();
    assert_eq!(response.status(), 200);

    let health_data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(health_data["status"], "healthy");
    assert_eq!(health_data["service"], "shardbot");
    assert!(health_data["timestamp"].as_u64().is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start(MockStreamAdmin::new(1))
        .await
        .expect("Failed to start test server");
    let helper = TestClient::new();

    let response = helper
        .client
        .get(format!("{}/nonexistent-endpoint", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
