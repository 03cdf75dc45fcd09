//! Derived lookup aliases for finalized entries.

use super::entry::CatalogEntry;

/// Placeholder example attached to every entry
pub fn example_for(display_label: &str) -> String {
    format!("Example for {}", display_label)
}

/// Add the derived aliases to an entry and attach its example.
///
/// Aliases are the lower-cased display label and the canonical key with
/// its spaces removed. Running this more than once changes nothing.
pub fn expand_aliases(key: &str, entry: &mut CatalogEntry) {
    entry.search_keys.insert(key.to_string());
    entry.search_keys.insert(entry.display_label.to_lowercase());
    entry.search_keys.insert(key.replace(' ', ""));

    entry.examples = vec![example_for(&entry.display_label)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry::AssetClass;

    #[test]
    fn test_expand_adds_derived_aliases() {
        let mut entry =
            CatalogEntry::new("thank you", "Thank You", AssetClass::Image, "/letters/Thank_You.png");

        expand_aliases("thank you", &mut entry);

        let keys: Vec<_> = entry.search_keys.iter().map(String::as_str).collect();
        assert_eq!(keys, vec!["thank you", "thankyou"]);
        assert_eq!(entry.examples, vec!["Example for Thank You"]);
    }

    #[test]
    fn test_label_alias_keeps_punctuation() {
        let mut entry =
            CatalogEntry::new("whats up", "What's Up?", AssetClass::Clip, "/ISL_Gifs/What's up?.gif");

        expand_aliases("whats up", &mut entry);

        assert!(entry.search_keys.contains("what's up?"));
        assert!(entry.search_keys.contains("whatsup"));
        assert!(entry.search_keys.contains("whats up"));
        assert_eq!(entry.search_keys.len(), 3);
    }

    #[test]
    fn test_expand_is_idempotent() {
        let mut entry =
            CatalogEntry::new("good morning", "Good Morning", AssetClass::Clip, "/ISL_Gifs/gm.gif");

        expand_aliases("good morning", &mut entry);
        let once = entry.clone();
        expand_aliases("good morning", &mut entry);

        assert_eq!(entry.search_keys, once.search_keys);
        assert_eq!(entry.examples, once.examples);
        assert_eq!(entry.examples.len(), 1);
    }
}
