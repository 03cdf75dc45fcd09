//! Serialization of finalized entries to catalog documents.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::entry::CatalogEntry;
use super::error::{CatalogError, Result};

/// Render entries as a pretty-printed JSON array (2-space indent)
pub fn render(entries: &[CatalogEntry]) -> Result<String> {
    let mut document = serde_json::to_string_pretty(entries)?;
    document.push('\n');
    Ok(document)
}

/// Create `path`'s parent directory if it is missing
fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CatalogError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write the same document to every destination, in order.
///
/// Stops at the first failure; destinations written before it are left in
/// place.
pub fn write_catalog(entries: &[CatalogEntry], destinations: &[PathBuf]) -> Result<()> {
    let document = render(entries)?;

    for path in destinations {
        ensure_parent(path)?;
        fs::write(path, &document).map_err(|source| CatalogError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", document.len(), path.display());
    }

    Ok(())
}
