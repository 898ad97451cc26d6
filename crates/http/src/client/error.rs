//! Client error types

use fancyspaces_core::CoreError;
use reqwest::StatusCode;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// A privileged operation was attempted without a valid session.
    /// Raised before any request is sent.
    #[error("User is not logged in")]
    NotLoggedIn,

    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a status the operation does not accept
    #[error(
        "Failed to {context} (code {code} \"{reason}\"): {body}",
        code = .status.as_u16(),
        reason = .status.canonical_reason().unwrap_or_default()
    )]
    Status {
        context: String,
        status: StatusCode,
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    /// Server answered successfully but without the expected content
    #[error("Failed to {0}: no content returned")]
    EmptyBody(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Session or storage failure
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    /// HTTP status carried by the error, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Missing session, or the server refused the credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotLoggedIn)
            || matches!(
                self.status(),
                Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            )
    }
}
