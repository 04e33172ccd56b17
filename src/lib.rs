//! Azure DevOps API client library.
//!
//! A Rust library for the Azure DevOps Services REST API, built around a
//! small dispatch engine and thin per-area facades. Every facade method
//! resolves a logical area into a concrete URL, attaches the personal
//! access token, performs exactly one HTTP call and deserializes the JSON
//! body into a typed model.
//!
//! # Quick Start
//!
//! ```no_run
//! use azdev::{AzDevClient, Connection};
//!
//! #[tokio::main]
//! async fn main() -> azdev::Result<()> {
//!     // Create a client from environment variables
//!     let client = AzDevClient::from_env()?;
//!
//!     // Or configure explicitly
//!     let connection = Connection::new("https://dev.azure.com/contoso", Some("demo"), "my-pat")?;
//!     let client = AzDevClient::new(connection)?;
//!
//!     // Fetch a build
//!     let build = client.build().get_build(42).await?;
//!     println!("Build {}: {:?}", build.id, build.status);
//!
//!     // List a team's current iterations
//!     let iterations = client
//!         .work()
//!         .get_team_iterations_in("Demo Team", azdev::TimeFrame::Current)
//!         .await?;
//!     println!("Found {} iterations", iterations.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around the dispatch engine:
//!
//! - [`Connection`] — immutable organization URL, optional default project
//!   and personal access token, shared by reference across all calls
//! - [`AzDevClient`] — composes URLs, attaches authentication, executes
//!   the call and translates the response
//! - [`AzDevError`] — the error taxonomy: configuration and argument
//!   errors surface before any I/O; service errors carry the remote
//!   message and type key; transport errors carry whatever was received
//!
//! Area facades ([`BuildApi`], [`GitApi`], [`WorkApi`], …) are reached
//! through accessor methods on the client and hold no state of their own.
//!
//! The engine performs no retries, no caching and no automatic
//! pagination: each call is one HTTP round trip, and paged endpoints
//! return one page plus a continuation token the caller resubmits.
//!
//! # Configuration
//!
//! [`AzDevClient::from_env`] reads:
//!
//! - `AZURE_DEVOPS_ORG` (required) - organization URL or bare host name
//! - `AZURE_DEVOPS_PAT` (required) - personal access token
//! - `AZURE_DEVOPS_PROJECT` (optional) - default project for
//!   project-scoped calls

pub mod api_version;
mod apis;
mod auth;
mod client;
mod connection;
mod error;
mod models;
mod request;
mod resources;
mod response;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::AzDevClient;
pub use connection::Connection;
pub use error::{AzDevError, Result};
pub use request::{QueryParams, ResourceAddress};
pub use resources::Resource;
pub use transport::{HttpTransport, RawResponse, RequestEnvelope, ReqwestTransport};

// Re-export facades
pub use apis::{
    BuildApi, CoreApi, GitApi, MemberEntitlementApi, ServiceHooksApi, WorkApi,
};

// Re-export models
pub use models::*;
