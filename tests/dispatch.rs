//! Tests for the dispatch engine's wire behavior.
//!
//! Uses wiremock to assert what actually goes over the wire: the composed
//! path, the api-version parameter, the basic-auth header, and how
//! success/error responses are translated.

use azdev::{AzDevClient, AzDevError, Connection};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer, project: Option<&str>) -> AzDevClient {
    let connection = Connection::new(&server.uri(), project, "test-pat").unwrap();
    AzDevClient::new(connection).unwrap()
}

#[tokio::test]
async fn test_dispatch_sends_basic_auth_and_api_version() {
    let server = MockServer::start().await;

    // base64(":test-pat")
    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds/42"))
        .and(query_param("api-version", "6.1-preview.6"))
        .and(header("Authorization", "Basic OnRlc3QtcGF0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "buildNumber": "20260805.1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    let build = client.build().get_build(42).await.unwrap();
    assert_eq!(build.id, 42);
}

#[tokio::test]
async fn test_query_parameters_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds"))
        .and(query_param("api-version", "6.1-preview.6"))
        .and(query_param("$top", "5"))
        .and(query_param("buildIds", "1,2,3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"count": 0, "value": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    let query = azdev::BuildListQuery {
        top: Some(5),
        build_ids: vec![1, 2, 3],
        ..Default::default()
    };
    let builds = client.build().get_builds(&query).await.unwrap();
    assert!(builds.is_empty());
}

#[tokio::test]
async fn test_service_error_carries_message_and_type_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "$id": "1",
            "innerException": null,
            "message": "The requested build 9999 could not be found.",
            "typeName": "Microsoft.TeamFoundation.Build.WebApi.BuildNotFoundException",
            "typeKey": "BuildNotFoundException",
            "errorCode": 0,
            "eventId": 3000,
        })))
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    let err = client.build().get_build(9999).await.unwrap_err();

    match err {
        AzDevError::Service {
            status,
            message,
            type_key,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "The requested build 9999 could not be found.");
            assert_eq!(type_key.as_deref(), Some("BuildNotFoundException"));
        }
        other => panic!("expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_error_body_becomes_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    let err = client.build().get_build(1).await.unwrap_err();

    match err {
        AzDevError::Transport { status, body } => {
            assert_eq!(status, Some(502));
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_body_delete_is_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/demo/_apis/build/builds/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    client.build().delete_build(42).await.unwrap();
}

#[tokio::test]
async fn test_text_response_kind_bypasses_json() {
    let server = MockServer::start().await;

    let log_text = "##[section]Starting: Build\nnot json at all\n";
    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds/42/logs/3"))
        .and(query_param("api-version", "6.1-preview.2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(log_text))
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    let body = client.build().get_build_log(42, 3).await.unwrap();
    assert_eq!(body, log_text);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error_without_status() {
    // Nothing is listening here.
    let connection = Connection::new("http://127.0.0.1:9", Some("demo"), "test-pat").unwrap();
    let client = AzDevClient::new(connection).unwrap();

    let err = client.build().get_build(1).await.unwrap_err();
    match err {
        AzDevError::Transport { status, .. } => assert_eq!(status, None),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_body_that_fails_to_parse_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/demo/_apis/build/builds/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client(&server, Some("demo")).await;
    let err = client.build().get_build(1).await.unwrap_err();
    assert!(matches!(err, AzDevError::Parse(_)));
}
