//! Error types for Azure DevOps API operations.

use thiserror::Error;

/// Errors that can occur during Azure DevOps API operations.
#[derive(Debug, Error)]
pub enum AzDevError {
    /// Connection configuration is missing or incomplete.
    ///
    /// Raised before any network I/O, e.g. when a project-scoped call is
    /// made against a connection that carries no project.
    #[error("Azure DevOps configuration required: {0}")]
    Configuration(String),

    /// A facade-level parameter failed validation before dispatch.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// The service returned a well-formed error response.
    ///
    /// `type_key` carries the service's semantic error category (e.g.
    /// "GitRepositoryNotFoundException") so callers can branch on it.
    #[error("Azure DevOps service error ({status}): {message}")]
    Service {
        status: u16,
        message: String,
        type_key: Option<String>,
    },

    /// Network-level failure, or a non-2xx response whose body was not a
    /// well-formed error document. `status` is `None` when the failure
    /// happened before any response was obtained.
    #[error("transport error{}: {body}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        body: String,
    },

    /// A successful response body failed to deserialize.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The organization URL is malformed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl AzDevError {
    /// HTTP status of the failed call, when one was obtained.
    pub fn status(&self) -> Option<u16> {
        match self {
            AzDevError::Service { status, .. } => Some(*status),
            AzDevError::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type alias for Azure DevOps operations.
pub type Result<T> = core::result::Result<T, AzDevError>;
