//! Response translation: raw status + body into typed values or errors.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AzDevError, Result};
use crate::transport::RawResponse;

/// Wire shape of a service error body. Unknown fields ($id, innerException,
/// errorCode, …) are ignored.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: String,
    #[serde(rename = "typeKey", default)]
    type_key: Option<String>,
}

/// Deserialize a successful JSON body into `T`.
///
/// Unknown fields are ignored and recognized-but-absent optional fields
/// default, which keeps the models forward-compatible with service schema
/// additions.
pub(crate) fn json<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    if !response.is_success() {
        return Err(error_from(response));
    }
    serde_json::from_str(&response.body).map_err(AzDevError::from)
}

/// Return the raw body unconditionally on success (log retrieval endpoints).
pub(crate) fn text(response: RawResponse) -> Result<String> {
    if !response.is_success() {
        return Err(error_from(response));
    }
    Ok(response.body)
}

/// Translate a response whose success carries no useful body.
///
/// Deletion endpoints may return an empty body on success; that is a
/// success, not a parse error. A non-empty body is parsed as generic JSON
/// and discarded; a non-JSON body is surfaced as a transport error.
pub(crate) fn no_content(response: RawResponse) -> Result<()> {
    if !response.is_success() {
        return Err(error_from(response));
    }
    if response.body.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(_) => Ok(()),
        Err(_) => Err(AzDevError::Transport {
            status: Some(response.status),
            body: response.body,
        }),
    }
}

/// Classify a non-2xx response.
///
/// A body that parses as the service's error envelope becomes a
/// `Service` error carrying status, message and type key; anything else
/// (HTML error pages, proxy noise, truncated bodies) becomes a `Transport`
/// error carrying the raw text.
fn error_from(response: RawResponse) -> AzDevError {
    match serde_json::from_str::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => AzDevError::Service {
            status: response.status,
            message: envelope.message,
            type_key: envelope.type_key,
        },
        Err(_) => AzDevError::Transport {
            status: Some(response.status),
            body: response.body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[derive(Debug, Deserialize)]
    struct Thing {
        id: u32,
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_json_ignores_unknown_fields() {
        let thing: Thing =
            json(raw(200, r#"{"id": 7, "name": "x", "futureField": [1, 2]}"#)).unwrap();
        assert_eq!(thing.id, 7);
        assert_eq!(thing.name.as_deref(), Some("x"));
    }

    #[test]
    fn test_json_defaults_missing_optional_fields() {
        let thing: Thing = json(raw(200, r#"{"id": 7}"#)).unwrap();
        assert_eq!(thing.name, None);
    }

    #[test]
    fn test_text_returns_body_verbatim() {
        let body = text(raw(200, "line one\nline two")).unwrap();
        assert_eq!(body, "line one\nline two");
    }

    #[test]
    fn test_empty_body_delete_is_success() {
        assert!(no_content(raw(204, "")).is_ok());
        assert!(no_content(raw(200, "  ")).is_ok());
    }

    #[test]
    fn test_json_body_delete_is_discarded() {
        assert!(no_content(raw(200, r#"{"deleted": true}"#)).is_ok());
    }

    #[test]
    fn test_non_json_delete_body_is_transport_error() {
        let err = no_content(raw(200, "<html>gateway</html>")).unwrap_err();
        match err {
            AzDevError::Transport { status, body } => {
                assert_eq!(status, Some(200));
                assert!(body.contains("gateway"));
            }
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn test_service_error_round_trips_message_and_type_key() {
        let body = r#"{"$id":"1","message":"Build 42 not found.","typeKey":"BuildNotFoundException","errorCode":0}"#;
        let err = json::<Thing>(raw(404, body)).unwrap_err();
        match err {
            AzDevError::Service {
                status,
                message,
                type_key,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Build 42 not found.");
                assert_eq!(type_key.as_deref(), Some("BuildNotFoundException"));
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn test_error_without_type_key_still_maps_to_service() {
        let err = json::<Thing>(raw(409, r#"{"message":"conflict"}"#)).unwrap_err();
        match err {
            AzDevError::Service { type_key, .. } => assert!(type_key.is_none()),
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_error_body_is_transport_error() {
        let err = json::<Thing>(raw(502, "Bad Gateway")).unwrap_err();
        match err {
            AzDevError::Transport { status, body } => {
                assert_eq!(status, Some(502));
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
