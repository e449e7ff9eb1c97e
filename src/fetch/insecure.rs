use super::client::HttpClient;
use async_trait::async_trait;

/// A reqwest client that skips certificate and hostname verification.
///
/// API Manager installations commonly sit behind internal or self-signed
/// certificates, so the portal client talks to them with relaxed TLS.
/// Timeouts are left at reqwest's defaults.
pub struct InsecureClient(reqwest::Client);

impl InsecureClient {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true)
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for InsecureClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
