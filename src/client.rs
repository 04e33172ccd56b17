//! Azure DevOps API client.
//!
//! Low-level dispatcher that composes request URLs, attaches
//! authentication, executes the HTTP call and translates the response.
//! Area-specific operations live on the facades reachable through the
//! accessor methods (`client.build()`, `client.git()`, …).

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::apis::{
    BuildApi, CoreApi, GitApi, MemberEntitlementApi, ServiceHooksApi, WorkApi,
};
use crate::auth;
use crate::connection::Connection;
use crate::error::{AzDevError, Result};
use crate::request::{compose_url, QueryParams, ResourceAddress};
use crate::response;
use crate::transport::{HttpTransport, RawResponse, RequestEnvelope, ReqwestTransport};

/// Dispatch engine for the Azure DevOps REST API.
///
/// Holds the immutable [`Connection`] and the HTTP transport. Cheaply
/// cloneable; clones share the same connection pool. The client holds no
/// mutable state, so concurrent calls need no coordination.
///
/// # Example
///
/// ```no_run
/// use azdev::{AzDevClient, Connection};
///
/// # async fn example() -> azdev::Result<()> {
/// let connection = Connection::new("https://dev.azure.com/contoso", Some("demo"), "my-pat")?;
/// let client = AzDevClient::new(connection)?;
///
/// let builds = client.build().get_builds(&Default::default()).await?;
/// println!("found {} builds", builds.value.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AzDevClient {
    connection: Arc<Connection>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for AzDevClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzDevClient")
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}

impl AzDevClient {
    /// Create a client over the given connection, using the default
    /// `reqwest`-backed transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(connection: Connection) -> Result<Self> {
        let transport = ReqwestTransport::new(connection.timeout())?;
        Ok(Self {
            connection: Arc::new(connection),
            transport: Arc::new(transport),
        })
    }

    /// Create a client from the `AZURE_DEVOPS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self> {
        Self::new(Connection::from_env()?)
    }

    /// Create a client with a caller-supplied transport.
    ///
    /// This is the seam used by tests to observe dispatches without any
    /// network I/O.
    pub fn with_transport(connection: Connection, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            connection: Arc::new(connection),
            transport,
        }
    }

    /// The connection this client dispatches against.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The configured project, or a [`AzDevError::Configuration`] error.
    ///
    /// Project-scoped facades call this before composing anything; a
    /// request that is guaranteed to be malformed never reaches the
    /// transport.
    pub fn require_project(&self) -> Result<String> {
        self.connection
            .project()
            .map(str::to_string)
            .ok_or_else(|| {
                AzDevError::Configuration(
                    "this call is project-scoped but the connection has no project set"
                        .to_string(),
                )
            })
    }

    /// Build API facade.
    pub fn build(&self) -> BuildApi<'_> {
        BuildApi::new(self)
    }

    /// Core (projects/teams) API facade.
    pub fn core(&self) -> CoreApi<'_> {
        CoreApi::new(self)
    }

    /// Git API facade.
    pub fn git(&self) -> GitApi<'_> {
        GitApi::new(self)
    }

    /// Work (iterations) API facade.
    pub fn work(&self) -> WorkApi<'_> {
        WorkApi::new(self)
    }

    /// Service hooks API facade.
    pub fn service_hooks(&self) -> ServiceHooksApi<'_> {
        ServiceHooksApi::new(self)
    }

    /// Member entitlement API facade.
    pub fn member_entitlement(&self) -> MemberEntitlementApi<'_> {
        MemberEntitlementApi::new(self)
    }

    /// Dispatch a call and deserialize the JSON response body into `T`.
    #[tracing::instrument(skip(self, body), fields(resource_id = address.resource.id()))]
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        address: &ResourceAddress,
        query: &QueryParams,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.execute(method, address, query, body).await?;
        response::json(response)
    }

    /// Dispatch a call and return the raw body text (log retrieval).
    #[tracing::instrument(skip(self), fields(resource_id = address.resource.id()))]
    pub async fn send_text(
        &self,
        method: Method,
        address: &ResourceAddress,
        query: &QueryParams,
    ) -> Result<String> {
        let response = self.execute(method, address, query, None).await?;
        response::text(response)
    }

    /// Dispatch a call whose success carries no useful body (deletions).
    #[tracing::instrument(skip(self), fields(resource_id = address.resource.id()))]
    pub async fn send_no_content(
        &self,
        method: Method,
        address: &ResourceAddress,
        query: &QueryParams,
    ) -> Result<()> {
        let response = self.execute(method, address, query, None).await?;
        response::no_content(response)
    }

    /// Compose the URL, attach headers, serialize the body and perform
    /// exactly one HTTP round trip.
    async fn execute(
        &self,
        method: Method,
        address: &ResourceAddress,
        query: &QueryParams,
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let url = compose_url(self.connection.base_url(), address, query);

        let mut headers = vec![(
            "Authorization".to_string(),
            auth::basic_header(self.connection.token()),
        )];
        let body = match body {
            Some(value) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(&value)?)
            }
            None => None,
        };

        tracing::debug!(%url, "dispatching request");

        self.transport
            .send(RequestEnvelope {
                method,
                url,
                headers,
                body,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport stub that records envelopes and replays canned responses.
    struct StubTransport {
        envelopes: Mutex<Vec<RequestEnvelope>>,
        response: RawResponse,
    }

    impl StubTransport {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                envelopes: Mutex::new(Vec::new()),
                response: RawResponse {
                    status,
                    body: body.to_string(),
                },
            })
        }

        fn calls(&self) -> usize {
            self.envelopes.lock().unwrap().len()
        }

        fn last(&self) -> RequestEnvelope {
            self.envelopes.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn send(&self, envelope: RequestEnvelope) -> Result<RawResponse> {
            self.envelopes.lock().unwrap().push(envelope);
            Ok(self.response.clone())
        }
    }

    fn client_with(
        project: Option<&str>,
        transport: Arc<StubTransport>,
    ) -> AzDevClient {
        let connection = Connection::new("contoso", project, "pat").unwrap();
        AzDevClient::with_transport(connection, transport)
    }

    #[tokio::test]
    async fn test_missing_project_fails_before_any_io() {
        let transport = StubTransport::new(200, "{}");
        let client = client_with(None, transport.clone());

        let err = client.build().get_build(42).await.unwrap_err();
        assert!(matches!(err, AzDevError::Configuration(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_dispatch_attaches_basic_auth_header() {
        let transport = StubTransport::new(200, r#"{"count":0,"value":[]}"#);
        let client = client_with(Some("demo"), transport.clone());

        client
            .build()
            .get_builds(&Default::default())
            .await
            .unwrap();

        let envelope = transport.last();
        let auth_header = envelope
            .headers
            .iter()
            .find(|(name, _)| name == "Authorization")
            .map(|(_, value)| value.clone())
            .unwrap();
        assert_eq!(auth_header, crate::auth::basic_header("pat"));
    }

    #[tokio::test]
    async fn test_body_sets_json_content_type() {
        let transport = StubTransport::new(200, r#"{"id":1}"#);
        let client = client_with(Some("demo"), transport.clone());

        let params = serde_json::json!({"definition": {"id": 7}});
        let _build: crate::models::Build = client
            .build()
            .queue_build_with_parameters(params)
            .await
            .unwrap();

        let envelope = transport.last();
        assert!(envelope
            .headers
            .iter()
            .any(|(name, value)| name == "Content-Type" && value == "application/json"));
        assert!(envelope.body.unwrap().contains("definition"));
    }

    #[tokio::test]
    async fn test_requests_without_body_have_no_content_type() {
        let transport = StubTransport::new(200, r#"{"id":1}"#);
        let client = client_with(Some("demo"), transport.clone());

        let _build: crate::models::Build = client.build().get_build(1).await.unwrap();

        let envelope = transport.last();
        assert!(!envelope.headers.iter().any(|(name, _)| name == "Content-Type"));
        assert!(envelope.body.is_none());
    }
}
