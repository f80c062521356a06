//! Command-line interface for medfinder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Look up one medication and list its alternatives
//! - **interactive**: Prompt for medication names until `exit`
//! - **catalog**: List, show, or export the medication catalog
//!
//! ## Usage
//!
//! ```text
//! # Look up a medication (case-insensitive)
//! medfinder search panadol
//!
//! # Only list alternatives costing at most 3 L.E.
//! medfinder search Augmentin --max-price 3
//!
//! # JSON output for scripting
//! medfinder --format json search Klavox
//!
//! # Use a different data file
//! medfinder --data ~/pharmacy.json interactive
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::{persist_sample, LoadStatus, MedicationCatalog, DEFAULT_DATA_FILE};
use crate::utils::validation::{parse_price_ceiling, parse_price_ceiling_strict};

pub mod catalog;
pub mod interactive;
pub mod render;
pub mod search;

#[derive(Parser)]
#[command(name = "medfinder")]
#[command(version)]
#[command(about = "Look up medications and find alternatives with the same active ingredient")]
#[command(
    long_about = "medfinder searches a local medication catalog by name.\n\nFor a known medication it shows the category, active ingredient, and price, and lists:\n- Alternatives sharing the same active ingredient\n- Optionally only those at or under a maximum price\n\nFor an unknown name it suggests similarly spelled medications."
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

    /// Medication data file (JSON array of medications)
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Do not save the built-in sample when the data file is missing
    #[arg(long, global = true)]
    pub no_write_back: bool,
}

impl Cli {
    pub fn data_source(&self) -> DataSource {
        DataSource {
            path: self.data.clone(),
            write_back: !self.no_write_back,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a medication and list its alternatives
    Search(search::SearchArgs),

    /// Search repeatedly from a prompt
    Interactive(interactive::InteractiveArgs),

    /// Inspect the medication catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the catalog comes from, and whether a missing file is recreated
#[derive(Debug, Clone)]
pub struct DataSource {
    pub path: PathBuf,
    pub write_back: bool,
}

impl DataSource {
    /// Load the catalog, applying the command-line policy for each outcome:
    /// a missing file falls back to the sample (saved unless disabled), a
    /// malformed or empty catalog aborts.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is malformed or contains no medications.
    pub fn load(&self, verbose: bool) -> anyhow::Result<MedicationCatalog> {
        let outcome = MedicationCatalog::load(&self.path)?;

        match &outcome.status {
            LoadStatus::Loaded => {}
            LoadStatus::Fallback { reason } => {
                eprintln!(
                    "Warning: Data file {} not readable ({reason}); using built-in sample data.",
                    self.path.display()
                );
                if self.write_back {
                    save_sample(&self.path);
                }
            }
            LoadStatus::Malformed { reason } => {
                anyhow::bail!(
                    "Failed to decode medication data from {}: {reason}. Please check the file format.",
                    self.path.display()
                );
            }
        }

        if outcome.catalog.is_empty() {
            anyhow::bail!(
                "No medication data available in {}. Please check the file path or contents.",
                self.path.display()
            );
        }

        if verbose {
            let origin = if outcome.used_fallback() {
                "built-in sample".to_string()
            } else {
                self.path.display().to_string()
            };
            eprintln!(
                "Loaded {} medications from {origin}",
                outcome.catalog.len()
            );
            if !outcome.skipped.is_empty() {
                eprintln!("Skipped {} invalid entries", outcome.skipped.len());
            }
        }

        Ok(outcome.catalog)
    }
}

fn save_sample(path: &Path) {
    match persist_sample(path) {
        Ok(()) => eprintln!("Saved built-in sample data to {}", path.display()),
        Err(e) => tracing::warn!(error = %e, "Could not save built-in sample data"),
    }
}

/// Interpret a raw price ceiling.
///
/// Lenient mode ignores bad input (with a warning); strict mode rejects it.
///
/// # Errors
///
/// In strict mode, returns an error for input that is not a positive number.
pub fn resolve_price_ceiling(raw: Option<&str>, strict: bool) -> anyhow::Result<Option<f64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    if strict {
        return Ok(parse_price_ceiling_strict(raw)?);
    }

    let ceiling = parse_price_ceiling(raw);
    if ceiling.is_none() && !raw.trim().is_empty() {
        tracing::warn!(input = raw.trim(), "Ignoring invalid maximum price");
    }
    Ok(ceiling)
}

/// Validate a similarity threshold argument (0.0 to 1.0)
pub(crate) fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0 and 1, got {value}"))
    }
}
