//! Cross-source merge of scanned files into catalog entries.
//!
//! Entries are keyed by canonical key and kept in first-seen order. Within
//! a key, each asset class holds the last reference ingested for it; the
//! display label is fixed when the entry is created.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::alias::expand_aliases;
use super::entry::{AssetClass, CatalogEntry};
use super::normalize::{normalize_key, pretty_display};

/// Order in which the two asset classes are merged.
///
/// The first class to reach a key decides its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    #[default]
    ImagesFirst,
    ClipsFirst,
}

impl ScanOrder {
    /// Asset classes in pass order
    pub fn passes(self) -> [AssetClass; 2] {
        match self {
            ScanOrder::ImagesFirst => [AssetClass::Image, AssetClass::Clip],
            ScanOrder::ClipsFirst => [AssetClass::Clip, AssetClass::Image],
        }
    }
}

impl std::fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanOrder::ImagesFirst => write!(f, "images_first"),
            ScanOrder::ClipsFirst => write!(f, "clips_first"),
        }
    }
}

/// Outcome of ingesting one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    /// A new entry was created
    Created,

    /// The file was folded into an existing entry
    Merged,
}

/// Insertion-ordered mapping from canonical key to entry
#[derive(Debug, Default)]
pub struct CatalogMap {
    index: HashMap<String, usize>,
    slots: Vec<(String, CatalogEntry)>,
}

impl CatalogMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scanned file into the mapping.
    ///
    /// `reference` is the root-relative path stored on the entry.
    pub fn ingest(&mut self, class: AssetClass, file_name: &str, reference: &str) -> Ingested {
        let key = normalize_key(file_name);

        if let Some(&slot) = self.index.get(&key) {
            let (_, entry) = &mut self.slots[slot];
            entry.set_ref(class, reference);
            entry.search_keys.insert(key);
            debug!("Merged {} '{}' into existing entry", class, file_name);
            return Ingested::Merged;
        }

        if key.is_empty() {
            warn!("'{}' normalizes to an empty key", file_name);
        }

        let entry = CatalogEntry::new(key.clone(), pretty_display(file_name), class, reference);
        debug!("Created entry '{}' from {} '{}'", key, class, file_name);
        self.index.insert(key.clone(), self.slots.len());
        self.slots.push((key, entry));
        Ingested::Created
    }

    /// Fold a whole scan of one asset class.
    ///
    /// Names are sorted first so that last-write-wins within the class does
    /// not depend on directory listing order.
    pub fn ingest_pass<I, F>(&mut self, class: AssetClass, names: I, reference: F)
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> String,
    {
        let mut names: Vec<String> = names.into_iter().collect();
        names.sort();

        for name in &names {
            self.ingest(class, name, &reference(name));
        }
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.index.get(key).map(|&slot| &self.slots[slot].1)
    }

    /// Canonical keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(key, _)| key.as_str())
    }

    /// `(canonical key, entry)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.slots.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Expand aliases on every entry and return them in mapping order
    pub fn finalize(self) -> Vec<CatalogEntry> {
        self.slots
            .into_iter()
            .map(|(key, mut entry)| {
                expand_aliases(&key, &mut entry);
                entry
            })
            .collect()
    }
}
