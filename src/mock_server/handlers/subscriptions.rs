//! Service hook subscription endpoint handlers.

use std::collections::HashMap;
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
use crate::Subscription;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionParams {
    pub publisher_id: String,
    pub event_type: String,
    #[serde(default)]
    pub resource_version: Option<String>,
    pub consumer_id: String,
    pub consumer_action_id: String,
    #[serde(default)]
    pub publisher_inputs: HashMap<String, String>,
    #[serde(default)]
    pub consumer_inputs: HashMap<String, String>,
}

fn not_found(id: &str) -> axum::response::Response {
    service_error(
        StatusCode::NOT_FOUND,
        format!("Subscription {id} does not exist."),
        "SubscriptionNotFoundException",
    )
}

/// GET /_apis/hooks/subscriptions
pub async fn list_subscriptions(
    State(state): State<Arc<RwLock<MockState>>>,
) -> impl IntoResponse {
    let state = state.read().await;
    let subscriptions: Vec<_> = state.subscriptions.values().cloned().collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "count": subscriptions.len(),
            "value": subscriptions,
        })),
    )
}

/// GET /_apis/hooks/subscriptions/:id
pub async fn get_subscription(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.subscriptions.get(&id) {
        Some(subscription) => (StatusCode::OK, Json(subscription.clone())).into_response(),
        None => not_found(&id),
    }
}

/// POST /_apis/hooks/subscriptions
pub async fn create_subscription(
    State(state): State<Arc<RwLock<MockState>>>,
    Json(params): Json<CreateSubscriptionParams>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    let subscription = Subscription {
        id: format!("sub-{}", state.subscriptions.len() + 1),
        url: None,
        status: Some("enabled".to_string()),
        publisher_id: Some(params.publisher_id),
        event_type: Some(params.event_type),
        event_description: None,
        resource_version: params.resource_version,
        consumer_id: Some(params.consumer_id),
        consumer_action_id: Some(params.consumer_action_id),
        action_description: None,
        publisher_inputs: params.publisher_inputs,
        consumer_inputs: params.consumer_inputs,
        created_by: None,
        created_date: None,
        modified_by: None,
        modified_date: None,
    };
    state
        .subscriptions
        .insert(subscription.id.clone(), subscription.clone());

    (StatusCode::OK, Json(subscription))
}

/// DELETE /_apis/hooks/subscriptions/:id
///
/// Answers 204 with an empty body.
pub async fn delete_subscription(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    match state.subscriptions.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(&id),
    }
}
