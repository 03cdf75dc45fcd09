//! Read side of a written catalog document.
//!
//! Loads the JSON array back and answers the lookups the front-end makes:
//! alias lookup, free-text search, and media filtering.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::entry::CatalogEntry;
use super::error::{CatalogError, Result};
use super::normalize::normalize_key;

/// Media selection for listing entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFilter {
    /// Has an image
    Image,

    /// Has a clip
    Clip,

    /// Has both an image and a clip
    Both,

    /// Has an image and no clip
    ImageOnly,

    /// Has a clip and no image
    ClipOnly,
}

impl MediaFilter {
    pub fn matches(self, entry: &CatalogEntry) -> bool {
        match self {
            MediaFilter::Image => entry.has_image(),
            MediaFilter::Clip => entry.has_clip(),
            MediaFilter::Both => entry.has_image() && entry.has_clip(),
            MediaFilter::ImageOnly => entry.has_image() && !entry.has_clip(),
            MediaFilter::ClipOnly => entry.has_clip() && !entry.has_image(),
        }
    }
}

/// Entry counts by media class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub with_image: usize,
    pub with_clip: usize,
    pub with_both: usize,
}

impl CatalogStats {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut stats, entry| {
            stats.total += 1;
            stats.with_image += entry.has_image() as usize;
            stats.with_clip += entry.has_clip() as usize;
            stats.with_both += (entry.has_image() && entry.has_clip()) as usize;
            stats
        })
    }
}

/// A catalog document loaded from disk
#[derive(Debug, Clone, Default)]
pub struct CatalogDocument {
    pub entries: Vec<CatalogEntry>,
}

impl CatalogDocument {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog document written by the builder
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let entries = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { entries })
    }

    /// Entries reachable by `query` through their search keys.
    ///
    /// The query is tried as typed (lower-cased), normalized like a file
    /// name, and normalized with spaces removed.
    pub fn lookup(&self, query: &str) -> Vec<&CatalogEntry> {
        let lowered = query.trim().to_lowercase();
        let key = normalize_key_text(query);
        let compact = key.replace(' ', "");

        if lowered.is_empty() && key.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.search_keys.contains(&lowered)
                    || entry.search_keys.contains(&key)
                    || entry.search_keys.contains(&compact)
            })
            .collect()
    }

    /// Case-insensitive substring search over labels and search keys
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.display_label.to_lowercase().contains(&query_lower)
                    || entry.search_keys.iter().any(|k| k.contains(&query_lower))
            })
            .collect()
    }

    pub fn filter_by_media(&self, filter: MediaFilter) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_entries(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalize free text the way file names are normalized.
///
/// Queries have no extension; the appended `.` keeps `Mr. Smith` whole.
fn normalize_key_text(query: &str) -> String {
    normalize_key(&format!("{}.", query))
}
