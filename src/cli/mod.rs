//! Command-line interface for topo-mask.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **identify**: Rank catalog creatures by how well they accept a configuration
//! - **compare**: Score one configuration against another or against a catalog creature
//! - **inspect**: Show how a configuration string is parsed
//! - **catalog**: List, show, or export creatures from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Who would take this look for one of their own?
//! topo-mask identify '1@1-2@0.5^0.35-3@0;1@4-2@0.5^0.75-3@1-4@0'
//!
//! # Read the configuration from a file or stdin
//! topo-mask identify --file disguise.txt
//! echo '1@1-2@0.5^0.5' | topo-mask identify -
//!
//! # JSON output for scripting
//! topo-mask identify --file disguise.txt --format json
//!
//! # How strongly does the cyclops accept a given look?
//! topo-mask compare '1@1-2@0.5^0.35-3@0' cyclops --reference
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::catalog::store::CreatureCatalog;

pub mod catalog;
pub mod compare;
pub mod identify;
pub mod inspect;

#[derive(Parser)]
#[command(name = "topo-mask")]
#[command(version)]
#[command(about = "Score part-based appearance configurations against known creatures")]
#[command(
    long_about = "topo-mask compares appearance configurations: sets of placed parts with a category, a normalized position, and an orientation.\n\nIt judges a candidate configuration against a catalog of known creatures and reports:\n- Which creatures would accept the look, best first\n- The per-look score breakdown for each creature\n- How a configuration string is parsed and normalized"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog creatures against a configuration
    Identify(identify::IdentifyArgs),

    /// Compare two configurations, or a configuration and a catalog creature
    Compare(compare::CompareArgs),

    /// Show the parsed structure of a configuration
    Inspect(inspect::InspectArgs),

    /// Browse or export the creature catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// A configuration given inline, from a file, or on stdin
#[derive(clap::Args, Debug)]
pub struct ConfigurationInput {
    /// Configuration string; '-' or omitted reads stdin
    pub text: Option<String>,

    /// Read the configuration string from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl ConfigurationInput {
    /// Resolve to the raw configuration text, without surrounding whitespace
    pub fn read(&self) -> anyhow::Result<String> {
        let raw = match (&self.file, self.text.as_deref()) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read configuration from {}", path.display()))?,
            (None, Some(text)) if text != "-" => text.to_string(),
            (None, _) => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read configuration from stdin")?;
                buffer
            }
        };
        Ok(raw.trim().to_string())
    }
}

/// Load a custom catalog, or the embedded one when no path is given
pub fn load_catalog(path: Option<&Path>, verbose: bool) -> anyhow::Result<CreatureCatalog> {
    let catalog = if let Some(path) = path {
        CreatureCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?
    } else {
        CreatureCatalog::load_embedded()?
    };

    if verbose {
        eprintln!(
            "Loaded catalog with {} creatures, {} compatibility pairs",
            catalog.len(),
            catalog.compatibility.len()
        );
    }

    Ok(catalog)
}
