//! Git repository endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::handlers::service_error;
use crate::mock_server::state::MockState;
use crate::GitRepository;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepositoryParams {
    pub name: Option<String>,
    pub default_branch: Option<String>,
}

fn not_found(id: &str) -> axum::response::Response {
    service_error(
        StatusCode::NOT_FOUND,
        format!("TF401019: The Git repository with name or identifier {id} does not exist."),
        "GitRepositoryNotFoundException",
    )
}

/// GET /:project/_apis/git/repositories
pub async fn list_repositories(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;
    let repositories: Vec<_> = state.repositories.values().cloned().collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": repositories.len(),
            "value": repositories,
        })),
    )
}

/// GET /:project/_apis/git/repositories/:id
pub async fn get_repository(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.find_repository(&id) {
        Some(repository) => (StatusCode::OK, Json(repository.clone())).into_response(),
        None => not_found(&id),
    }
}

/// POST /:project/_apis/git/repositories
pub async fn create_repository(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(_project): Path<String>,
    Json(params): Json<CreateRepositoryParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    let repository = GitRepository {
        id: format!("repo-{}", state.repositories.len() + 1),
        name: Some(params.name),
        url: None,
        project: None,
        default_branch: None,
        size: Some(0),
        remote_url: None,
        ssh_url: None,
        web_url: None,
        is_disabled: Some(false),
        is_fork: Some(false),
    };
    state
        .repositories
        .insert(repository.id.clone(), repository.clone());

    (StatusCode::CREATED, Json(repository))
}

/// PATCH /:project/_apis/git/repositories/:id
pub async fn update_repository(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
    Json(params): Json<UpdateRepositoryParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.repositories.get_mut(&id) {
        Some(repository) => {
            if let Some(name) = params.name {
                repository.name = Some(name);
            }
            if let Some(branch) = params.default_branch {
                repository.default_branch = Some(branch);
            }
            (StatusCode::OK, Json(repository.clone())).into_response()
        }
        None => not_found(&id),
    }
}

/// DELETE /:project/_apis/git/repositories/:id
///
/// Answers 204 with an empty body, the way the service does.
pub async fn delete_repository(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((_project, id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.repositories.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(&id),
    }
}
