//! Connection configuration for an Azure DevOps organization.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{AzDevError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Immutable connection settings: organization URL, optional default
/// project, and the personal access token used for authentication.
///
/// A `Connection` is created once at SDK construction and shared by
/// reference across all API calls; nothing mutates it afterwards, so it is
/// safe to use from concurrent tasks without coordination.
///
/// # Example
///
/// ```no_run
/// use azdev::Connection;
///
/// # fn example() -> azdev::Result<()> {
/// // Full organization URL
/// let conn = Connection::new("https://dev.azure.com/contoso", Some("demo"), "my-pat")?;
///
/// // Bare organization host, normalized to https
/// let conn = Connection::new("contoso", Some("demo"), "my-pat")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Connection {
    base_url: Url,
    project: Option<String>,
    token: String,
    timeout: Duration,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url.as_str())
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Create a connection from an organization URL or bare host name,
    /// an optional default project, and a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`AzDevError::Configuration`] if the token is empty and
    /// [`AzDevError::Url`] if the organization URL does not parse.
    pub fn new(
        organization: &str,
        project: Option<&str>,
        token: &str,
    ) -> Result<Self> {
        if token.is_empty() {
            return Err(AzDevError::Configuration(
                "personal access token must not be empty".to_string(),
            ));
        }

        let base = if organization.contains("://") {
            organization.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", organization.trim_end_matches('/'))
        };
        let base_url = Url::parse(&base)?;

        Ok(Self {
            base_url,
            project: project.map(str::to_string),
            token: token.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a connection from environment variables.
    ///
    /// Uses `AZURE_DEVOPS_ORG` and `AZURE_DEVOPS_PAT`, plus the optional
    /// `AZURE_DEVOPS_PROJECT` as the default project.
    ///
    /// # Errors
    ///
    /// Returns an error if `AZURE_DEVOPS_ORG` or `AZURE_DEVOPS_PAT` is not set.
    pub fn from_env() -> Result<Self> {
        let organization = env::var("AZURE_DEVOPS_ORG").map_err(|_| {
            AzDevError::Configuration("AZURE_DEVOPS_ORG environment variable not set".to_string())
        })?;
        let token = env::var("AZURE_DEVOPS_PAT").map_err(|_| {
            AzDevError::Configuration("AZURE_DEVOPS_PAT environment variable not set".to_string())
        })?;
        let project = env::var("AZURE_DEVOPS_PROJECT").ok();

        Self::new(&organization, project.as_deref(), &token)
    }

    /// Override the request timeout handed to the HTTP transport.
    ///
    /// The engine defines no timeout semantics of its own; this is a
    /// pass-through to the underlying client.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The organization base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The default project, if one was configured.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The personal access token.
    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// The transport timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_organization_is_normalized() {
        let conn = Connection::new("contoso", Some("demo"), "pat").unwrap();
        assert_eq!(conn.base_url().as_str(), "https://contoso/");
    }

    #[test]
    fn test_full_url_kept_verbatim() {
        let conn = Connection::new("https://dev.azure.com/contoso", None, "pat").unwrap();
        assert_eq!(conn.base_url().as_str(), "https://dev.azure.com/contoso");
        assert_eq!(conn.project(), None);
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = Connection::new("contoso", Some("demo"), "").unwrap_err();
        assert!(matches!(err, AzDevError::Configuration(_)));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let conn = Connection::new("contoso", Some("demo"), "secret-pat").unwrap();
        let debug = format!("{:?}", conn);
        assert!(debug.contains("Connection"));
        assert!(!debug.contains("secret-pat"));
    }
}
