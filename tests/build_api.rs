//! Tests for the build facade.

use azdev::{AzDevClient, Connection};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> AzDevClient {
    let connection = Connection::new(&server.uri(), Some("demo"), "test-pat").unwrap();
    AzDevClient::new(connection).unwrap()
}

#[tokio::test]
async fn test_queue_build_by_definition_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/demo/_apis/build/builds"))
        .and(query_param("definitionId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 101,
            "status": "notStarted",
            "definition": {"id": 7, "name": "Demo-CI"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let build = client.build().queue_build(7).await.unwrap();
    assert_eq!(build.id, 101);
    assert_eq!(build.definition.unwrap().id, Some(7));
}

#[tokio::test]
async fn test_queue_build_with_parameters_posts_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/demo/_apis/build/builds"))
        .and(body_partial_json(serde_json::json!({
            "definition": {"id": 7},
            "sourceBranch": "refs/heads/release"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 102,
            "sourceBranch": "refs/heads/release"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let build = client
        .build()
        .queue_build_with_parameters(serde_json::json!({
            "definition": {"id": 7},
            "sourceBranch": "refs/heads/release",
        }))
        .await
        .unwrap();
    assert_eq!(build.id, 102);
}

#[tokio::test]
async fn test_changes_between_builds_uses_area_root() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/changes"))
        .and(query_param("api-version", "6.1-preview.2"))
        .and(query_param("fromBuildId", "10"))
        .and(query_param("toBuildId", "20"))
        .and(query_param("$top", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "value": [{
                "id": "9fc5d6c0",
                "message": "Fix flaky test",
                "type": "commit"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let changes = client
        .build()
        .get_changes_between_builds(10, 20, Some(50))
        .await
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes.value[0].message.as_deref(), Some("Fix flaky test"));
}

#[tokio::test]
async fn test_build_controllers_are_organization_scoped() {
    let server = MockServer::start().await;

    // No project segment in the path even though the connection has one.
    Mock::given(method("GET"))
        .and(path("/_apis/build/controllers"))
        .and(query_param("name", "pool-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 1,
            "value": [{"id": 3, "name": "pool-1", "enabled": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let controllers = client
        .build()
        .get_build_controllers(Some("pool-1"))
        .await
        .unwrap();
    assert_eq!(controllers.value[0].id, 3);
}

#[tokio::test]
async fn test_definition_lifecycle_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/definitions/7"))
        .and(query_param("api-version", "6.1-preview.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "name": "Demo-CI",
            "revision": 12
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/definitions/7/revisions"))
        .and(query_param("api-version", "6.1-preview.3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "value": [
                {"revision": 11, "changeType": "update"},
                {"revision": 12, "changeType": "update"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/demo/_apis/build/definitions/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client(&server).await;

    let definition = client.build().get_build_definition(7).await.unwrap();
    assert_eq!(definition.revision, Some(12));

    let revisions = client
        .build()
        .get_build_definition_revisions(7)
        .await
        .unwrap();
    assert_eq!(revisions.len(), 2);

    client.build().delete_build_definition(7).await.unwrap();
}

#[tokio::test]
async fn test_restore_build_definition_sends_deleted_flag() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/demo/_apis/build/definitions/7"))
        .and(query_param("deleted", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "name": "Demo-CI"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let definition = client
        .build()
        .restore_build_definition(7, false)
        .await
        .unwrap();
    assert_eq!(definition.id, 7);
}

#[tokio::test]
async fn test_build_log_range_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds/42/logs/3"))
        .and(query_param("startLine", "5"))
        .and(query_param("endLine", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_string("line five onward"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let text = client
        .build()
        .get_build_log_range(42, 3, 5, 25)
        .await
        .unwrap();
    assert_eq!(text, "line five onward");
}
