//! Retrieval of frontend and original backend specifications from API Manager.
//!
//! A call runs `frontend fetch` or `resolve backend id -> backend fetch`
//! depending on [`SpecSource`]; every request is awaited before the next
//! one is issued.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::config::ConnectionProfile;
use crate::error::{FallbackAttempt, ProviderError, UpstreamCall};
use crate::fetch::{ApiManagerClient, HttpClient, InsecureClient, RawResponse};
use crate::services::schema_api::{FrontendStrategy, ProviderOptions, SchemaApi, SpecSource};
use crate::spec::log_detected_version;

/// Versions asked for, in order, by [`FrontendStrategy::VersionFallback`].
const FALLBACK_VERSIONS: [&str; 2] = ["2.0", "3.0"];

#[derive(Deserialize)]
struct ProxyResponse {
    #[serde(rename = "apiId")]
    api_id: Option<serde_json::Value>,
}

pub struct SchemaProvider<C> {
    client: ApiManagerClient<C>,
    options: ProviderOptions,
}

impl SchemaProvider<InsecureClient> {
    pub fn new(profile: &ConnectionProfile, options: ProviderOptions) -> Result<Self, ProviderError> {
        Ok(Self::with_client(ApiManagerClient::new(profile)?, options))
    }
}

impl<C: HttpClient> SchemaProvider<C> {
    pub fn with_client(client: ApiManagerClient<C>, options: ProviderOptions) -> Self {
        Self { client, options }
    }

    pub fn options(&self) -> ProviderOptions {
        self.options
    }

    /// Loads the specification for `api_id` according to the configured
    /// source and frontend strategy.
    #[tracing::instrument(skip(self), fields(source = ?self.options.source))]
    pub async fn get_schema(&self, api_id: &str) -> Result<String, ProviderError> {
        info!("Loading API specification");

        match self.options.source {
            SpecSource::Frontend => match self.options.strategy {
                FrontendStrategy::Direct => self.frontend_spec(api_id).await,
                FrontendStrategy::VersionFallback => self.frontend_spec_with_fallback(api_id).await,
            },
            SpecSource::OriginalBackend => {
                let backend_id = self.resolve_backend_id(api_id).await?;
                info!(%backend_id, "Loading original backend API specification");
                self.backend_spec(&backend_id).await
            }
        }
    }

    /// Looks up the backend API-ID behind the frontend proxy `api_id`.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_backend_id(&self, api_id: &str) -> Result<String, ProviderError> {
        debug!("Resolving backend API-ID");
        let resp = self.client.get(&format!("/proxies/{api_id}")).await?;

        if !resp.is_ok() {
            if resp.status == StatusCode::FORBIDDEN && resp.body.contains("Forbidden") {
                info!("API Manager returned Forbidden. Please check if the given API-ID is correct");
            }
            return Err(upstream_failure(UpstreamCall::BackendId, resp));
        }

        let proxy: ProxyResponse = serde_json::from_str(&resp.body)?;
        match proxy.api_id {
            Some(serde_json::Value::String(id)) => Ok(id),
            Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
            Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
            _ => Err(ProviderError::MissingBackendId),
        }
    }

    async fn frontend_spec(&self, api_id: &str) -> Result<String, ProviderError> {
        debug!("Downloading frontend API specification");
        let resp = self
            .client
            .get(&format!("/discovery/swagger/api/id/{api_id}"))
            .await?;
        accept_spec(UpstreamCall::FrontendSpec, resp)
    }

    async fn frontend_spec_with_fallback(&self, api_id: &str) -> Result<String, ProviderError> {
        let mut attempts = Vec::with_capacity(FALLBACK_VERSIONS.len());

        for (i, version) in FALLBACK_VERSIONS.into_iter().enumerate() {
            if i > 0 {
                info!(
                    previous = FALLBACK_VERSIONS[i - 1],
                    next = version,
                    "Specification not available, trying next swaggerVersion"
                );
            }

            let resp = self
                .client
                .get(&format!(
                    "/discovery/swagger/api/id/{api_id}?swaggerVersion={version}"
                ))
                .await?;
            debug!(swagger_version = version, status = resp.status.as_u16(), "Received response");

            if resp.is_ok() && !resp.body.is_empty() {
                log_detected_version(&resp.body);
                return Ok(resp.body);
            }
            attempts.push(FallbackAttempt {
                swagger_version: version,
                status: resp.status,
                empty_body: resp.body.is_empty(),
            });
        }

        error!(?attempts, "No specification version available");
        Err(ProviderError::NoSpecAvailable { attempts })
    }

    async fn backend_spec(&self, backend_id: &str) -> Result<String, ProviderError> {
        debug!("Downloading backend API specification");
        let resp = self
            .client
            .get(&format!("/apirepo/{backend_id}/download?original=true"))
            .await?;
        accept_spec(UpstreamCall::BackendSpec, resp)
    }
}

fn accept_spec(call: UpstreamCall, resp: RawResponse) -> Result<String, ProviderError> {
    if !resp.is_ok() {
        return Err(upstream_failure(call, resp));
    }
    log_detected_version(&resp.body);
    Ok(resp.body)
}

fn upstream_failure(call: UpstreamCall, resp: RawResponse) -> ProviderError {
    error!(
        %call,
        status = resp.status.as_u16(),
        response = %resp.body,
        "Error getting {call}"
    );
    ProviderError::Upstream {
        call,
        status: resp.status,
        body: resp.body,
    }
}

#[async_trait]
impl<C: HttpClient> SchemaApi for SchemaProvider<C> {
    async fn get_schema(&self, api_id: &str) -> Result<String, ProviderError> {
        SchemaProvider::get_schema(self, api_id).await
    }
}
