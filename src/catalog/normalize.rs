//! Key normalization for asset file names.
//!
//! Two independent views of a file name:
//! - the canonical key, lossy on purpose so that `Thank_You.png` and
//!   `thank-you.gif` land on the same entry
//! - the display label shown to people

/// Strip the extension (text after the final `.`).
///
/// Leading dots of a dot-file are not treated as a separator, so `.hidden`
/// is kept whole. A name without an extension is returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    let leading = name.len() - name.trim_start_matches('.').len();

    match name[leading..].rfind('.') {
        Some(pos) => &name[..leading + pos],
        None => name,
    }
}

/// Derive the canonical lookup key from a file name.
///
/// Lower-cases, turns `_` and `-` into spaces, drops anything that is
/// neither alphanumeric nor whitespace, and collapses runs of whitespace.
/// A punctuation-only name yields an empty key.
pub fn normalize_key(name: &str) -> String {
    let base = strip_extension(name).to_lowercase();

    let cleaned: String = base
        .trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive the human-facing label from a file name.
///
/// Only the first letter of each word is upper-cased; the rest of the word
/// keeps its original casing (`ok_GOOGLE.gif` becomes `Ok GOOGLE`).
pub fn pretty_display(name: &str) -> String {
    strip_extension(name)
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
