//! Mock Azure DevOps API server.
//!
//! Provides an axum-based HTTP server that simulates a small slice of the
//! Azure DevOps REST API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock Azure DevOps server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns
    /// immediately. Use `url()` as the organization URL when creating a
    /// `Connection` for testing.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for project in scenario.projects {
            state = state.with_project(project);
        }
        for repository in scenario.repositories {
            state = state.with_repository(repository);
        }
        for build in scenario.builds {
            state = state.with_build(build);
        }
        for (build_id, log_id, text) in scenario.build_logs {
            state = state.with_build_log(build_id, log_id, &text);
        }
        for subscription in scenario.subscriptions {
            state = state.with_subscription(subscription);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Organization-scoped routes
            .route("/_apis/projects", get(handlers::list_projects))
            .route("/_apis/projects/:name", get(handlers::get_project))
            .route(
                "/_apis/hooks/subscriptions",
                get(handlers::list_subscriptions).post(handlers::create_subscription),
            )
            .route(
                "/_apis/hooks/subscriptions/:id",
                get(handlers::get_subscription).delete(handlers::delete_subscription),
            )
            // Project-scoped routes
            .route(
                "/:project/_apis/git/repositories",
                get(handlers::list_repositories).post(handlers::create_repository),
            )
            .route(
                "/:project/_apis/git/repositories/:id",
                get(handlers::get_repository)
                    .patch(handlers::update_repository)
                    .delete(handlers::delete_repository),
            )
            .route(
                "/:project/_apis/build/builds",
                get(handlers::list_builds).post(handlers::queue_build),
            )
            .route(
                "/:project/_apis/build/builds/:id",
                get(handlers::get_build).delete(handlers::delete_build),
            )
            .route(
                "/:project/_apis/build/builds/:id/logs",
                get(handlers::list_build_logs),
            )
            .route(
                "/:project/_apis/build/builds/:id/logs/:log",
                get(handlers::get_build_log),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AzDevClient, Connection};

    fn client_for(server: &MockServer) -> AzDevClient {
        let connection = Connection::new(server.url(), Some("demo"), "test-pat").unwrap();
        AzDevClient::new(connection).unwrap()
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_build_with_client() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let build = client.build().get_build(1).await.expect("Failed to get build");
        assert_eq!(build.id, 1);
        assert_eq!(build.result.as_deref(), Some("succeeded"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server_yields_service_errors() {
        let server = MockServer::start_empty().await;
        let client = client_for(&server);

        let result = client.git().get_repository("missing").await;
        assert!(result.is_err());

        server.shutdown().await;
    }
}
