//! Mock Azure DevOps API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates a slice of
//! the Azure DevOps REST API for integration and end-to-end testing.
//! Unlike wiremock which mocks at the HTTP level per-test, this server
//! maintains state across requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use azdev::mock_server::MockServer;
//! use azdev::{AzDevClient, Connection};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let connection = Connection::new(server.url(), Some("demo"), "test-pat").unwrap();
//!     let client = AzDevClient::new(connection).unwrap();
//!
//!     // Server comes with default fixtures
//!     let build = client.build().get_build(1).await.unwrap();
//!     assert_eq!(build.id, 1);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
