//! Catalog entry and asset class types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Which source collection a file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    /// Static image (letters, words)
    Image,

    /// Animated clip (words, phrases)
    Clip,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Image => write!(f, "image"),
            AssetClass::Clip => write!(f, "clip"),
        }
    }
}

/// One merged record in the catalog.
///
/// The canonical key that identifies the entry during the merge is not a
/// field here; it is always a member of `search_keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable label
    #[serde(rename = "word")]
    pub display_label: String,

    /// Root-relative path of the static image
    #[serde(rename = "image")]
    pub image_ref: Option<String>,

    /// Root-relative path of the animated clip
    #[serde(rename = "gif")]
    pub clip_ref: Option<String>,

    /// Lookup aliases, lower-case
    #[serde(rename = "searchKeys")]
    pub search_keys: BTreeSet<String>,

    /// Example usages
    pub examples: Vec<String>,
}

impl CatalogEntry {
    /// Create an entry from the first file observed for `key`
    pub fn new(
        key: impl Into<String>,
        display_label: impl Into<String>,
        class: AssetClass,
        reference: impl Into<String>,
    ) -> Self {
        let mut entry = Self {
            display_label: display_label.into(),
            image_ref: None,
            clip_ref: None,
            search_keys: BTreeSet::from([key.into()]),
            examples: Vec::new(),
        };
        entry.set_ref(class, reference);
        entry
    }

    /// Replace the reference for one asset class
    pub fn set_ref(&mut self, class: AssetClass, reference: impl Into<String>) {
        match class {
            AssetClass::Image => self.image_ref = Some(reference.into()),
            AssetClass::Clip => self.clip_ref = Some(reference.into()),
        }
    }

    /// Reference for one asset class, if present
    pub fn media_ref(&self, class: AssetClass) -> Option<&str> {
        match class {
            AssetClass::Image => self.image_ref.as_deref(),
            AssetClass::Clip => self.clip_ref.as_deref(),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_ref.is_some()
    }

    pub fn has_clip(&self) -> bool {
        self.clip_ref.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_sets_only_its_class() {
        let entry = CatalogEntry::new("hello", "Hello", AssetClass::Clip, "/ISL_Gifs/hello.gif");

        assert_eq!(entry.clip_ref.as_deref(), Some("/ISL_Gifs/hello.gif"));
        assert!(entry.image_ref.is_none());
        assert!(entry.search_keys.contains("hello"));
        assert_eq!(entry.search_keys.len(), 1);
    }

    #[test]
    fn test_absent_refs_serialize_as_null() {
        let entry = CatalogEntry::new("bye", "Bye", AssetClass::Clip, "/ISL_Gifs/Bye.gif");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["word"], "Bye");
        assert!(json.get("image").is_some());
        assert!(json["image"].is_null());
        assert_eq!(json["gif"], "/ISL_Gifs/Bye.gif");
        assert_eq!(json["searchKeys"], serde_json::json!(["bye"]));
        assert_eq!(json["examples"], serde_json::json!([]));
    }

    #[test]
    fn test_media_ref() {
        let mut entry = CatalogEntry::new("a", "A", AssetClass::Image, "/letters/A.jpg");
        entry.set_ref(AssetClass::Clip, "/ISL_Gifs/a.gif");

        assert_eq!(entry.media_ref(AssetClass::Image), Some("/letters/A.jpg"));
        assert_eq!(entry.media_ref(AssetClass::Clip), Some("/ISL_Gifs/a.gif"));
        assert!(entry.has_image() && entry.has_clip());
    }
}
