//! Asset directory scanning.
//!
//! Lists the plain files directly inside a source directory. A missing
//! source directory is not an error; it simply contributes nothing.

use std::fs::{self, ReadDir};
use std::path::Path;

use glob::Pattern;
use tracing::{debug, info, warn};

use super::error::{CatalogError, Result};

/// File-name patterns to leave out of a scan (e.g. `.DS_Store`, `*.json`)
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Compile a list of glob patterns
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|source| CatalogError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Lazy iterator over the plain-file names in one directory
#[derive(Debug)]
pub struct AssetScan<'a> {
    entries: Option<ReadDir>,
    ignore: &'a IgnoreSet,
}

impl<'a> AssetScan<'a> {
    /// A scan that yields nothing
    pub fn empty(ignore: &'a IgnoreSet) -> Self {
        Self {
            entries: None,
            ignore,
        }
    }
}

impl Iterator for AssetScan<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let entries = self.entries.as_mut()?;

        for entry in entries.by_ref() {
            // Entries we cannot read are skipped like any other non-file
            let Ok(entry) = entry else { continue };

            // Follows links, so broken links and links to directories drop out
            if !entry.path().is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!("Skipping non UTF-8 file name: {}", entry.path().display());
                continue;
            };

            if self.ignore.is_ignored(name) {
                debug!("Ignoring {}", name);
                continue;
            }

            return Some(name.to_string());
        }

        None
    }
}

/// Scan `dir` for plain files, non-recursively.
///
/// Yields nothing when `dir` does not exist or is not a directory. Fails
/// only when an existing directory cannot be listed.
pub fn scan_dir<'a>(dir: &Path, ignore: &'a IgnoreSet) -> Result<AssetScan<'a>> {
    if !dir.is_dir() {
        info!("Source directory not found, skipping: {}", dir.display());
        return Ok(AssetScan::empty(ignore));
    }

    let entries = fs::read_dir(dir).map_err(|source| CatalogError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(AssetScan {
        entries: Some(entries),
        ignore,
    })
}
