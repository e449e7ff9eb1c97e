//! Connection settings for an API Manager instance.

use std::fmt;

use reqwest::Url;

use crate::error::ProviderError;

/// Base URL and credentials of one API Manager.
///
/// Fixed for the lifetime of the client built from it. The URL is validated
/// on construction so a bad value fails before any request is attempted.
#[derive(Clone)]
pub struct ConnectionProfile {
    base_url: Url,
    username: String,
    password: String,
}

impl ConnectionProfile {
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidBaseUrl`] if `base_url` does not parse
    /// or is not an absolute `http`/`https` URL with a host.
    pub fn new(
        base_url: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let invalid = |reason: String| ProviderError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }

        Ok(Self {
            base_url: parsed,
            username: username.into(),
            password: password.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_with_port() {
        let profile = ConnectionProfile::new("https://apim.local:8075", "apiadmin", "secret").unwrap();
        assert_eq!(profile.base_url().port(), Some(8075));
        assert_eq!(profile.username(), "apiadmin");
    }

    #[test]
    fn test_rejects_malformed_url() {
        let err = ConnectionProfile::new("not a url", "u", "p").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ConnectionProfile::new("ftp://apim.local", "u", "p").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_rejects_query_string() {
        assert!(ConnectionProfile::new("https://apim.local/?x=1", "u", "p").is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let profile = ConnectionProfile::new("https://apim.local", "apiadmin", "hunter2").unwrap();
        let printed = format!("{profile:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("apiadmin"));
    }
}
