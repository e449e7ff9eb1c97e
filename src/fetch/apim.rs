use tracing::debug;

use super::auth::BasicAuth;
use super::client::HttpClient;
use super::insecure::InsecureClient;
use super::{RawResponse, fetch_text};
use crate::config::ConnectionProfile;
use crate::error::ProviderError;

/// Portal API version every request path is prefixed with.
pub const API_VERSION_PREFIX: &str = "/api/portal/v1.4";

/// GET-only client for the API Manager portal REST API.
pub struct ApiManagerClient<C> {
    base: String,
    http: BasicAuth<C>,
}

impl ApiManagerClient<InsecureClient> {
    /// Builds a client with relaxed TLS and preemptive basic auth.
    pub fn new(profile: &ConnectionProfile) -> Result<Self, ProviderError> {
        Ok(Self::with_client(profile, InsecureClient::new()?))
    }
}

impl<C: HttpClient> ApiManagerClient<C> {
    /// Uses `http` as the transport; credentials from `profile` are layered on top.
    pub fn with_client(profile: &ConnectionProfile, http: C) -> Self {
        let base = profile.base_url().as_str().trim_end_matches('/').to_string();
        Self {
            base,
            http: BasicAuth::new(http, profile.username(), profile.password()),
        }
    }

    /// Full URL for a portal path such as `/proxies/{id}`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{API_VERSION_PREFIX}{path}", self.base)
    }

    /// Issues a GET for `path` (relative to the portal API root).
    pub async fn get(&self, path: &str) -> Result<RawResponse, ProviderError> {
        let url = self.url_for(path);
        debug!(%url, "GET");
        let resp = fetch_text(&self.http, &url).await?;
        debug!(%url, status = resp.status.as_u16(), bytes = resp.body.len(), "Response received");
        Ok(resp)
    }
}
