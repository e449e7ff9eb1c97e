mod apim;
mod client;
mod insecure;
pub mod auth;

pub use apim::{API_VERSION_PREFIX, ApiManagerClient};
pub use client::HttpClient;
pub use insecure::InsecureClient;

use reqwest::StatusCode;

use crate::error::ProviderError;

/// Status and body of a completed request.
///
/// The body is read exactly once; reading it consumes the underlying
/// response and hands the connection back to the pool.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

pub async fn fetch_text<C: HttpClient>(
    client: &C,
    url: &str,
) -> Result<RawResponse, ProviderError> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse()?,
    );

    let resp = client.execute(req).await?;
    let status = resp.status();
    let body = resp.text().await?;
    Ok(RawResponse { status, body })
}
