//! HTTP request handlers for the mock server.

pub mod builds;
pub mod projects;
pub mod repositories;
pub mod subscriptions;

pub use builds::*;
pub use projects::*;
pub use repositories::*;
pub use subscriptions::*;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Render an error the way the service does: a JSON document carrying a
/// human message and a semantic type key.
pub(crate) fn service_error(status: StatusCode, message: String, type_key: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "$id": "1",
            "message": message,
            "typeKey": type_key,
            "errorCode": 0,
        })),
    )
        .into_response()
}
