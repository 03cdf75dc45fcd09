//! Configuration for catalog locations.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (ISL_PUBLIC_DIR)
//! 2. Config file (.isl/config.yaml)
//! 3. Defaults (./public, letters, ISL_Gifs, ISL_Gifs.json + glossary.json)
//!
//! Config file discovery:
//! - Searches current directory and parents for .isl/config.yaml
//! - Paths in config file are relative to the project root (parent of .isl/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{
    AssetClass, AssetSource, CatalogLayout, IgnoreSet, ScanOrder, DEFAULT_CLIP_DIR,
    DEFAULT_IMAGE_DIR, DEFAULT_OUTPUTS,
};

/// Environment override for the public asset root
pub const PUBLIC_DIR_ENV: &str = "ISL_PUBLIC_DIR";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Output file names, relative to the public directory
    #[serde(default)]
    pub outputs: Option<Vec<String>>,
    /// Glob patterns of file names to leave out
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub scan_order: Option<ScanOrder>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Public asset root (relative to project root)
    pub public: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesConfig {
    /// Image subdirectory name
    pub images: Option<String>,
    /// Clip subdirectory name
    pub clips: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to the public asset root
    pub public_dir: PathBuf,
    /// Image subdirectory name
    pub image_dir: String,
    /// Clip subdirectory name
    pub clip_dir: String,
    /// Output file names under the public root
    pub outputs: Vec<String>,
    /// Ignore patterns for scanned file names
    pub ignore: Vec<String>,
    /// Merge pass order
    pub scan_order: ScanOrder,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Defaults rooted at `<base>/public`
    pub fn defaults(base: &Path) -> Self {
        Self {
            public_dir: base.join("public"),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            clip_dir: DEFAULT_CLIP_DIR.to_string(),
            outputs: DEFAULT_OUTPUTS.iter().map(|s| s.to_string()).collect(),
            ignore: Vec::new(),
            scan_order: ScanOrder::default(),
            config_file: None,
        }
    }

    /// Output document paths
    pub fn destinations(&self) -> Vec<PathBuf> {
        self.outputs.iter().map(|o| self.public_dir.join(o)).collect()
    }

    /// Build the catalog layout this configuration describes
    pub fn layout(&self) -> Result<CatalogLayout> {
        let ignore = IgnoreSet::new(&self.ignore).context("Invalid ignore patterns in config")?;

        Ok(CatalogLayout {
            images: AssetSource::under(&self.public_dir, AssetClass::Image, &self.image_dir),
            clips: AssetSource::under(&self.public_dir, AssetClass::Clip, &self.clip_dir),
            destinations: self.destinations(),
            ignore,
            scan_order: self.scan_order,
        })
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".isl").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge config file values and the environment override onto defaults
fn resolve(
    cwd: &Path,
    config_file: Option<PathBuf>,
    env_public: Option<PathBuf>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::defaults(cwd);

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Project root is the parent of .isl/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        if let Some(ref public) = config.paths.public {
            resolved.public_dir = resolve_path(base_dir, public);
        } else {
            resolved.public_dir = base_dir.join("public");
        }
        if let Some(images) = config.sources.images {
            resolved.image_dir = images;
        }
        if let Some(clips) = config.sources.clips {
            resolved.clip_dir = clips;
        }
        if let Some(outputs) = config.outputs {
            resolved.outputs = outputs;
        }
        if let Some(order) = config.scan_order {
            resolved.scan_order = order;
        }
        resolved.ignore = config.ignore;
    }

    if let Some(public) = env_public {
        resolved.public_dir = public;
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let env_public = std::env::var(PUBLIC_DIR_ENV).ok().map(PathBuf::from);

    resolve(&cwd, find_config_file(&cwd), env_public)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
