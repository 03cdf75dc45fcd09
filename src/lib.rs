//! isl-catalog - Sign-language lookup catalog builder
//!
//! Merges two independently maintained asset folders, static images keyed
//! by word or letter and animated clips keyed by word or phrase, into one
//! JSON catalog addressable by a normalized lookup key.
//!
//! # Modules
//!
//! - `catalog`: scanning, key normalization, merge, aliases, output
//! - `config`: asset and output locations
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Build public/ISL_Gifs.json and public/glossary.json
//! isl-catalog
//!
//! # Look up a word in the written catalog
//! isl-catalog lookup "thank you"
//! ```

pub mod catalog;
pub mod cli;
pub mod config;

// Re-export main types at crate root for convenience
pub use catalog::{
    build, normalize_key, pretty_display, AssetClass, BuildReport, CatalogDocument,
    CatalogEntry, CatalogError, CatalogLayout, CatalogMap, ScanOrder,
};
