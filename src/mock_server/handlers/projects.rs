//! Project endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use crate::mock_server::handlers::service_error;
use crate::mock_server::state::MockState;

/// GET /_apis/projects
pub async fn list_projects(State(state): State<Arc<RwLock<MockState>>>) -> impl IntoResponse {
    let state = state.read().await;
    let projects: Vec<_> = state.projects.values().cloned().collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": projects.len(),
            "value": projects,
        })),
    )
}

/// GET /_apis/projects/:name
pub async fn get_project(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.projects.get(&name) {
        Some(project) => (StatusCode::OK, Json(project.clone())).into_response(),
        None => service_error(
            StatusCode::NOT_FOUND,
            format!("The following project does not exist: {name}."),
            "ProjectDoesNotExistWithNameException",
        ),
    }
}
