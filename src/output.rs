//! Writing retrieved specifications to a file or stdout.

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Writes `spec` to `path`, creating parent directories as needed.
/// With no path the document goes to stdout.
pub fn write_spec(path: Option<&Path>, spec: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, spec)?;
            info!(path = %path.display(), bytes = spec.len(), "Specification written");
        }
        None => {
            debug!(bytes = spec.len(), "Writing specification to stdout");
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(spec.as_bytes())?;
            if !spec.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
