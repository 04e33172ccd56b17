//! Build endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::handlers::service_error;
use crate::mock_server::state::MockState;

#[derive(Debug, Default, Deserialize)]
pub struct ListBuildsQuery {
    #[serde(rename = "$top")]
    pub top: Option<usize>,
    #[serde(rename = "buildIds")]
    pub build_ids: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueueBuildQuery {
    #[serde(rename = "definitionId")]
    pub definition_id: Option<u32>,
}

fn not_found(id: u32) -> axum::response::Response {
    service_error(
        StatusCode::NOT_FOUND,
        format!("The requested build {id} could not be found."),
        "BuildNotFoundException",
    )
}

/// GET /:project/_apis/build/builds
pub async fn list_builds(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Query(query): Query<ListBuildsQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    let id_filter: Option<Vec<u32>> = query
        .build_ids
        .as_deref()
        .map(|ids| ids.split(',').filter_map(|id| id.parse().ok()).collect());

    let mut builds: Vec<_> = state
        .builds
        .values()
        .filter(|b| {
            id_filter
                .as_ref()
                .map(|ids| ids.contains(&b.id))
                .unwrap_or(true)
        })
        .cloned()
        .collect();
    builds.sort_by_key(|b| b.id);

    if let Some(top) = query.top {
        builds.truncate(top);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": builds.len(),
            "value": builds,
        })),
    )
}

/// GET /:project/_apis/build/builds/:id
pub async fn get_build(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, u32)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.builds.get(&id) {
        Some(build) => (StatusCode::OK, Json(build.clone())).into_response(),
        None => not_found(id),
    }
}

/// POST /:project/_apis/build/builds
pub async fn queue_build(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Query(query): Query<QueueBuildQuery>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let build = state.queue_build(query.definition_id).clone();

    (StatusCode::OK, Json(build))
}

/// DELETE /:project/_apis/build/builds/:id
///
/// Answers 204 with an empty body.
pub async fn delete_build(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, u32)>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.builds.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(id),
    }
}

/// GET /:project/_apis/build/builds/:id/logs
pub async fn list_build_logs(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, u32)>,
) -> impl IntoResponse {
    let state = state.read().await;

    let logs: Vec<_> = state
        .build_logs
        .keys()
        .filter(|(build_id, _)| *build_id == id)
        .map(|(_, log_id)| {
            serde_json::json!({
                "id": log_id,
                "type": "Container",
                "lineCount": 2,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": logs.len(),
            "value": logs,
        })),
    )
}

/// GET /:project/_apis/build/builds/:id/logs/:log
///
/// Returns plain text, bypassing JSON entirely.
pub async fn get_build_log(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id, log_id)): Path<(String, u32, u32)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.build_logs.get(&(id, log_id)) {
        Some(text) => (StatusCode::OK, text.clone()).into_response(),
        None => not_found(id),
    }
}
