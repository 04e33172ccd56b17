//! Tests for the organization-scoped service hooks facade.

use std::collections::HashMap;

use azdev::{AzDevClient, Connection, SubscriptionParams};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Connection deliberately carries no project: subscriptions are
/// organization-scoped and must not require one.
async fn client(server: &MockServer) -> AzDevClient {
    let connection = Connection::new(&server.uri(), None, "test-pat").unwrap();
    AzDevClient::new(connection).unwrap()
}

#[tokio::test]
async fn test_subscriptions_are_organization_scoped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_apis/hooks/subscriptions"))
        .and(query_param("api-version", "6.1-preview.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "value": [{
                "id": "sub-1",
                "status": "enabled",
                "publisherId": "tfs",
                "eventType": "build.complete",
                "consumerId": "webHooks",
                "consumerActionId": "httpRequest"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let subscriptions = client.service_hooks().get_subscriptions().await.unwrap();
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(
        subscriptions.value[0].event_type.as_deref(),
        Some("build.complete")
    );
}

#[tokio::test]
async fn test_create_subscription_posts_publisher_and_consumer_inputs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/_apis/hooks/subscriptions"))
        .and(body_partial_json(serde_json::json!({
            "publisherId": "tfs",
            "eventType": "build.complete",
            "consumerId": "webHooks",
            "consumerActionId": "httpRequest",
            "publisherInputs": {"definitionName": "Demo-CI", "buildStatus": "Failed"},
            "consumerInputs": {"url": "https://example.test/hook"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "sub-9",
            "status": "enabled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let params = SubscriptionParams {
        publisher_id: "tfs".to_string(),
        event_type: "build.complete".to_string(),
        resource_version: "1.0-preview.1".to_string(),
        consumer_id: "webHooks".to_string(),
        consumer_action_id: "httpRequest".to_string(),
        publisher_inputs: HashMap::from([
            ("definitionName".to_string(), "Demo-CI".to_string()),
            ("buildStatus".to_string(), "Failed".to_string()),
        ]),
        consumer_inputs: HashMap::from([(
            "url".to_string(),
            "https://example.test/hook".to_string(),
        )]),
    };
    let subscription = client
        .service_hooks()
        .create_subscription(&params)
        .await
        .unwrap();
    assert_eq!(subscription.id, "sub-9");
}

#[tokio::test]
async fn test_delete_subscription_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/_apis/hooks/subscriptions/sub-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    client
        .service_hooks()
        .delete_subscription("sub-1")
        .await
        .unwrap();
}
