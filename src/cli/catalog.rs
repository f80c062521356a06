use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::write_atomic;
use crate::cli::{DataSource, OutputFormat};
use crate::core::display::{detail_lines, format_price};
use crate::core::medication::MedicationRecord;
use crate::matching::engine::MedicineFinder;
use crate::utils::validation::validate_query;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all medications in the catalog
    List {
        /// Filter by category (e.g., "antibiotic")
        #[arg(long)]
        category: Option<String>,

        /// Filter by active ingredient (case-insensitive)
        #[arg(long)]
        ingredient: Option<String>,
    },

    /// Show every field of one medication
    Show {
        /// Medication name (case-insensitive)
        #[arg(required = true)]
        name: String,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a medication is not
/// found, or the export cannot be written.
pub fn run(
    args: CatalogArgs,
    source: &DataSource,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            category,
            ingredient,
        } => run_list(
            source,
            category.as_deref(),
            ingredient.as_deref(),
            format,
            verbose,
        ),
        CatalogCommands::Show { name } => run_show(source, &name, format, verbose),
        CatalogCommands::Export { output } => run_export(source, output, verbose),
    }
}

fn run_list(
    source: &DataSource,
    category_filter: Option<&str>,
    ingredient_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = source.load(verbose)?;

    let filtered: Vec<&MedicationRecord> = catalog
        .iter()
        .filter(|r| category_filter.map_or(true, |c| r.category.matches_label(c)))
        .filter(|r| {
            ingredient_filter.map_or(true, |i| r.active_ingredient.eq_ignore_ascii_case(i.trim()))
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let name_width = column_width(filtered.iter().map(|r| r.name.as_str()), 4, 30);
            let category_width =
                column_width(filtered.iter().map(|r| r.category.label()), 8, 20);
            let ingredient_width =
                column_width(filtered.iter().map(|r| r.active_ingredient.as_str()), 17, 30);

            let total_width = name_width + category_width + ingredient_width + 12 + 3;

            println!("Medication Catalog ({} medications)\n", filtered.len());
            println!(
                "{:<name_w$} {:<cat_w$} {:<ing_w$} {:>12}",
                "Name",
                "Category",
                "Active Ingredient",
                "Price",
                name_w = name_width,
                cat_w = category_width,
                ing_w = ingredient_width,
            );
            println!("{}", "-".repeat(total_width));

            for r in &filtered {
                println!(
                    "{:<name_w$} {:<cat_w$} {:<ing_w$} {:>12}",
                    truncate(&r.name, name_width),
                    truncate(r.category.label(), category_width),
                    truncate(&r.active_ingredient, ingredient_width),
                    format_price(r.price),
                    name_w = name_width,
                    cat_w = category_width,
                    ing_w = ingredient_width,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
    }

    Ok(())
}

fn run_show(
    source: &DataSource,
    name: &str,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let name = validate_query(name)?;
    let catalog = source.load(verbose)?;
    let finder = MedicineFinder::new(&catalog);

    let Some(record) = finder.find(name) else {
        let suggestions = finder.suggest(name);
        if suggestions.is_empty() {
            anyhow::bail!("Medication '{name}' not found in catalog");
        }
        anyhow::bail!(
            "Medication '{name}' not found in catalog (did you mean: {}?)",
            suggestions.join(", ")
        );
    };

    match format {
        OutputFormat::Text => {
            for line in detail_lines(record) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    }

    Ok(())
}

fn run_export(source: &DataSource, output: PathBuf, verbose: bool) -> anyhow::Result<()> {
    let catalog = source.load(verbose)?;

    let json = catalog.to_json()?;
    write_atomic(&output, &json)?;

    println!(
        "Exported {} medications to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, min: usize, max: usize) -> usize {
    values
        .map(|v| v.chars().count().min(max))
        .max()
        .unwrap_or(min)
        .max(min)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
