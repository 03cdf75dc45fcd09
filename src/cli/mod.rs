//! Command-line interface for isl-catalog.
//!
//! Builds the catalog (the default command) and inspects a written one.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{self, CatalogDocument, CatalogEntry, MediaFilter};
use crate::config::{self, ResolvedConfig};

/// isl-catalog - Sign-language lookup catalog builder
#[derive(Parser, Debug)]
#[command(name = "isl-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the asset folders and write the catalog (default)
    Build,

    /// Find entries by word or alias
    Lookup {
        /// Word, phrase, or file-style name
        query: String,
    },

    /// Substring search over words and aliases
    Search {
        /// Search query
        query: String,
    },

    /// List catalog entries
    List {
        /// Only entries with this media
        #[arg(short, long, value_enum)]
        media: Option<MediaArg>,

        /// Maximum number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show entry counts by media
    Stats,

    /// Show resolved configuration (debug)
    Config,
}

/// Media filter for CLI (maps to MediaFilter)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MediaArg {
    /// Has an image
    Image,

    /// Has a clip
    Gif,

    /// Has both
    Both,

    /// Image without clip
    ImageOnly,

    /// Clip without image
    GifOnly,
}

impl From<MediaArg> for MediaFilter {
    fn from(m: MediaArg) -> Self {
        match m {
            MediaArg::Image => MediaFilter::Image,
            MediaArg::Gif => MediaFilter::Clip,
            MediaArg::Both => MediaFilter::Both,
            MediaArg::ImageOnly => MediaFilter::ImageOnly,
            MediaArg::GifOnly => MediaFilter::ClipOnly,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let config = config::config()?;

        match self.command.unwrap_or(Commands::Build) {
            Commands::Build => build_catalog(config),
            Commands::Lookup { query } => lookup(config, &query),
            Commands::Search { query } => search(config, &query),
            Commands::List { media, limit } => list(config, media, limit),
            Commands::Stats => show_stats(config),
            Commands::Config => show_config(config),
        }
    }
}

/// Run the catalog build and print the completion summary
fn build_catalog(config: &ResolvedConfig) -> Result<()> {
    let layout = config.layout()?;
    let report = catalog::build(&layout).context("Catalog build failed")?;

    println!("Written {} entries to:", report.entries.len());
    for path in &report.destinations {
        println!("  {}", path.display());
    }

    Ok(())
}

/// Load the first written catalog document
fn load_document(config: &ResolvedConfig) -> Result<CatalogDocument> {
    let path = config
        .destinations()
        .into_iter()
        .next()
        .context("No catalog outputs configured")?;

    CatalogDocument::load(&path)
        .with_context(|| format!("Run `isl-catalog build` first ({})", path.display()))
}

fn lookup(config: &ResolvedConfig, query: &str) -> Result<()> {
    let doc = load_document(config)?;
    let matches = doc.lookup(query);

    if matches.is_empty() {
        println!("No entry for '{}'", query);
        return Ok(());
    }

    for entry in matches {
        print_entry(entry);
    }

    Ok(())
}

fn search(config: &ResolvedConfig, query: &str) -> Result<()> {
    let doc = load_document(config)?;
    let results = doc.search(query);

    if results.is_empty() {
        println!("No results for '{}'", query);
        return Ok(());
    }

    println!("Found {} result(s):\n", results.len());
    print_table(results.into_iter());

    Ok(())
}

fn list(config: &ResolvedConfig, media: Option<MediaArg>, limit: usize) -> Result<()> {
    let doc = load_document(config)?;

    let entries: Vec<&CatalogEntry> = match media {
        Some(m) => doc.filter_by_media(m.into()),
        None => doc.entries.iter().collect(),
    };

    if entries.is_empty() {
        println!("No entries");
        return Ok(());
    }

    let total = entries.len();
    print_table(entries.into_iter().take(limit));
    if total > limit {
        println!("\n... {} more", total - limit);
    }

    Ok(())
}

fn show_stats(config: &ResolvedConfig) -> Result<()> {
    let stats = load_document(config)?.stats();

    println!("Entries:    {}", stats.total);
    println!("With image: {}", stats.with_image);
    println!("With gif:   {}", stats.with_clip);
    println!("With both:  {}", stats.with_both);

    Ok(())
}

fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("Config file: {}", match &config.config_file {
        Some(path) => path.display().to_string(),
        None => "(none, using defaults)".to_string(),
    });
    println!("Public dir:  {}", config.public_dir.display());
    println!("Images:      {}", config.public_dir.join(&config.image_dir).display());
    println!("Clips:       {}", config.public_dir.join(&config.clip_dir).display());
    println!("Scan order:  {}", config.scan_order);
    if !config.ignore.is_empty() {
        println!("Ignore:      {}", config.ignore.join(", "));
    }
    println!("Outputs:");
    for path in config.destinations() {
        println!("  {}", path.display());
    }

    Ok(())
}

fn print_entry(entry: &CatalogEntry) {
    println!("{}", entry.display_label);
    println!("  image: {}", entry.image_ref.as_deref().unwrap_or("-"));
    println!("  gif:   {}", entry.clip_ref.as_deref().unwrap_or("-"));
    println!(
        "  keys:  {}",
        entry.search_keys.iter().cloned().collect::<Vec<_>>().join(", ")
    );
}

fn print_table<'a>(entries: impl Iterator<Item = &'a CatalogEntry>) {
    println!("{:<30} {:<6} {:<6}", "WORD", "IMAGE", "GIF");
    println!("{}", "-".repeat(44));

    for entry in entries {
        let word = if entry.display_label.chars().count() > 28 {
            format!("{}...", entry.display_label.chars().take(25).collect::<String>())
        } else {
            entry.display_label.clone()
        };
        println!(
            "{:<30} {:<6} {:<6}",
            word,
            if entry.has_image() { "yes" } else { "-" },
            if entry.has_clip() { "yes" } else { "-" },
        );
    }
}
