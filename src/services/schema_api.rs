//! Trait and options for retrieving API specifications by API-ID.

use crate::error::ProviderError;

/// Which specification to return for a frontend API-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecSource {
    /// The specification as published by the API Manager.
    #[default]
    Frontend,
    /// The specification originally imported from the backend service,
    /// looked up through the proxy's backend API-ID.
    OriginalBackend,
}

/// How the frontend specification is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontendStrategy {
    /// Single request; the API Manager picks the format.
    #[default]
    Direct,
    /// Ask for `swaggerVersion=2.0`, then `swaggerVersion=3.0`.
    VersionFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProviderOptions {
    pub source: SpecSource,
    pub strategy: FrontendStrategy,
}

impl ProviderOptions {
    pub fn original_backend(mut self) -> Self {
        self.source = SpecSource::OriginalBackend;
        self
    }

    pub fn version_fallback(mut self) -> Self {
        self.strategy = FrontendStrategy::VersionFallback;
        self
    }
}

/// Abstraction over a source of API specifications (e.g., an API Manager).
#[async_trait::async_trait]
pub trait SchemaApi {
    /// Returns the specification document for `api_id` as raw text.
    async fn get_schema(&self, api_id: &str) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_direct_frontend() {
        let options = ProviderOptions::default();
        assert_eq!(options.source, SpecSource::Frontend);
        assert_eq!(options.strategy, FrontendStrategy::Direct);
    }

    #[test]
    fn test_builders_compose() {
        let options = ProviderOptions::default()
            .version_fallback()
            .original_backend();
        assert_eq!(options.source, SpecSource::OriginalBackend);
        assert_eq!(options.strategy, FrontendStrategy::VersionFallback);
    }
}
