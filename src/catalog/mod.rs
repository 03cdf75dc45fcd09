//! Sign-language lookup catalog.
//!
//! Scans the image and clip asset folders, merges files that name the same
//! word into one entry, and writes the result as JSON.
//!
//! # Layout
//!
//! ```text
//! public/
//! ├── letters/           # static images (A.jpg, Hello.png, ...)
//! ├── ISL_Gifs/          # animated clips (thank-you.gif, ...)
//! ├── ISL_Gifs.json      # media-lookup index
//! └── glossary.json      # glossary (same bytes)
//! ```
//!
//! Data flows one way: scanner → normalize → merge → alias → writer.

pub mod alias;
pub mod document;
pub mod entry;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod scanner;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::info;

pub use document::{CatalogDocument, CatalogStats, MediaFilter};
pub use entry::{AssetClass, CatalogEntry};
pub use error::{CatalogError, Result};
pub use merge::{CatalogMap, Ingested, ScanOrder};
pub use normalize::{normalize_key, pretty_display};
pub use scanner::{scan_dir, AssetScan, IgnoreSet};
pub use writer::{render, write_catalog};

/// Default image subdirectory under the public root
pub const DEFAULT_IMAGE_DIR: &str = "letters";

/// Default clip subdirectory under the public root
pub const DEFAULT_CLIP_DIR: &str = "ISL_Gifs";

/// Default output file names under the public root
pub const DEFAULT_OUTPUTS: [&str; 2] = ["ISL_Gifs.json", "glossary.json"];

/// One asset collection on disk
#[derive(Debug, Clone)]
pub struct AssetSource {
    pub class: AssetClass,

    /// Directory to scan
    pub dir: PathBuf,

    /// Path segment used in references (`/<segment>/<file>`)
    pub url_segment: String,
}

impl AssetSource {
    /// Source at `<root>/<subdir>`, referenced as `/<subdir>/...`
    pub fn under(root: &Path, class: AssetClass, subdir: &str) -> Self {
        Self {
            class,
            dir: root.join(subdir),
            url_segment: subdir.trim_matches('/').to_string(),
        }
    }

    /// Root-relative reference for a file in this source
    pub fn reference(&self, file_name: &str) -> String {
        format!("/{}/{}", self.url_segment, file_name)
    }
}

/// Where to read assets from and where to write the catalog
#[derive(Debug, Clone)]
pub struct CatalogLayout {
    pub images: AssetSource,
    pub clips: AssetSource,
    pub destinations: Vec<PathBuf>,
    pub ignore: IgnoreSet,
    pub scan_order: ScanOrder,
}

impl CatalogLayout {
    /// Default layout rooted at a public directory
    pub fn under(public_dir: &Path) -> Self {
        Self {
            images: AssetSource::under(public_dir, AssetClass::Image, DEFAULT_IMAGE_DIR),
            clips: AssetSource::under(public_dir, AssetClass::Clip, DEFAULT_CLIP_DIR),
            destinations: DEFAULT_OUTPUTS.iter().map(|f| public_dir.join(f)).collect(),
            ignore: IgnoreSet::default(),
            scan_order: ScanOrder::default(),
        }
    }

    pub fn source(&self, class: AssetClass) -> &AssetSource {
        match class {
            AssetClass::Image => &self.images,
            AssetClass::Clip => &self.clips,
        }
    }
}

/// Result of a completed build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub entries: Vec<CatalogEntry>,
    pub stats: CatalogStats,
    pub destinations: Vec<PathBuf>,
}

/// Scan, merge and expand, without writing anything
pub fn collect(layout: &CatalogLayout) -> Result<Vec<CatalogEntry>> {
    let mut map = CatalogMap::new();

    for class in layout.scan_order.passes() {
        let source = layout.source(class);
        let scan = scan_dir(&source.dir, &layout.ignore)?;
        map.ingest_pass(class, scan, |name| source.reference(name));
        info!("Scanned {} source {} ({} entries so far)", class, source.dir.display(), map.len());
    }

    Ok(map.finalize())
}

/// Build the catalog and write it to every destination
pub fn build(layout: &CatalogLayout) -> Result<BuildReport> {
    let entries = collect(layout)?;
    write_catalog(&entries, &layout.destinations)?;

    let stats = CatalogStats::from_entries(&entries);
    info!(
        "Catalog built: {} entries ({} with image, {} with clip, {} with both)",
        stats.total, stats.with_image, stats.with_clip, stats.with_both
    );

    Ok(BuildReport {
        entries,
        stats,
        destinations: layout.destinations.clone(),
    })
}
