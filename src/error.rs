//! Error type shared by the transport wrapper and the schema provider.

use std::fmt;

use reqwest::StatusCode;

/// The required API Manager call that returned a non-200 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    /// `/discovery/swagger/api/id/{apiId}`
    FrontendSpec,
    /// `/proxies/{apiId}`
    BackendId,
    /// `/apirepo/{backendId}/download?original=true`
    BackendSpec,
}

impl fmt::Display for UpstreamCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UpstreamCall::FrontendSpec => "frontend API specification",
            UpstreamCall::BackendId => "backend API-ID",
            UpstreamCall::BackendSpec => "original backend API specification",
        };
        f.write_str(label)
    }
}

/// One `swaggerVersion` variant tried by the version-fallback strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAttempt {
    pub swagger_version: &'static str,
    pub status: StatusCode,
    pub empty_body: bool,
}

impl fmt::Display for FallbackAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swaggerVersion={} -> {}", self.swagger_version, self.status)?;
        if self.empty_body {
            f.write_str(" (empty body)")?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid API Manager URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("error getting {call} from API Manager (status {status}): {body}")]
    Upstream {
        call: UpstreamCall,
        status: StatusCode,
        body: String,
    },

    #[error(
        "unable to load API specification (Swagger 2.0 or OpenAPI 3.0) from API Manager: {}",
        join_attempts(.attempts)
    )]
    NoSpecAvailable { attempts: Vec<FallbackAttempt> },

    #[error("proxy response has no scalar 'apiId' field")]
    MissingBackendId,

    #[error("failed to parse API Manager response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request URL is invalid: {0}")]
    InvalidRequestUrl(#[from] url::ParseError),

    #[error("HTTP request to API Manager failed: {0}")]
    Transport(#[from] reqwest::Error),
}

fn join_attempts(attempts: &[FallbackAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ProviderError {
    /// HTTP status carried by an [`ProviderError::Upstream`] failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
