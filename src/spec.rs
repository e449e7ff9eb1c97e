//! Sniffing of Swagger / OpenAPI documents.

use std::fmt;

use anyhow::Result;
use tracing::{error, info};

/// Format family of a specification document, judged by its top-level keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    /// Document has a top-level `openapi` key.
    OpenApi3,
    /// Document has a top-level `swagger` key.
    Swagger2,
    /// Valid JSON object with neither key.
    Unknown,
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecVersion::OpenApi3 => f.write_str("OpenAPI 3"),
            SpecVersion::Swagger2 => f.write_str("Swagger 2"),
            SpecVersion::Unknown => f.write_str("unknown"),
        }
    }
}

/// Detects the specification version of a JSON document.
///
/// `openapi` wins when both keys are present.
///
/// # Errors
///
/// Returns an error if `content` is not valid JSON.
pub fn detect_version(content: &str) -> Result<SpecVersion> {
    let root: serde_json::Value = serde_json::from_str(content)?;
    let version = match root.as_object() {
        Some(obj) if obj.contains_key("openapi") => SpecVersion::OpenApi3,
        Some(obj) if obj.contains_key("swagger") => SpecVersion::Swagger2,
        _ => SpecVersion::Unknown,
    };
    Ok(version)
}

/// Logs the detected version of `content`. Never fails.
pub fn log_detected_version(content: &str) -> Option<SpecVersion> {
    match detect_version(content) {
        Ok(SpecVersion::Unknown) => {
            error!("Unknown API specification format");
            Some(SpecVersion::Unknown)
        }
        Ok(version) => {
            info!(%version, "Detected {version} specification");
            Some(version)
        }
        Err(e) => {
            error!(error = %e, "Unable to detect API specification version");
            None
        }
    }
}
