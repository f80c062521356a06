use clap::Args;

use crate::cli::render::write_outcome;
use crate::cli::{parse_threshold, resolve_price_ceiling, DataSource, OutputFormat};
use crate::matching::engine::{
    LookupOutcome, MatcherConfig, MedicineFinder, DEFAULT_SIMILARITY_THRESHOLD,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::utils::validation::validate_query;

#[derive(Args)]
pub struct SearchArgs {
    /// Medication name (case-insensitive)
    #[arg(required = true)]
    pub name: String,

    /// Only list alternatives priced at or under this amount
    #[arg(short, long)]
    pub max_price: Option<String>,

    /// Reject an invalid --max-price instead of ignoring it
    #[arg(long)]
    pub strict_price: bool,

    /// Maximum number of suggestions when the name is not found
    #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub suggestions: usize,

    /// Minimum similarity (0-1) for a name to be suggested
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the input is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: SearchArgs,
    source: &DataSource,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let name = validate_query(&args.name)?;
    let max_price = resolve_price_ceiling(args.max_price.as_deref(), args.strict_price)?;

    let catalog = source.load(verbose)?;

    let config = MatcherConfig {
        suggestion_limit: args.suggestions,
        similarity_threshold: args.threshold,
    };
    let finder = MedicineFinder::with_config(&catalog, config);
    let outcome = finder.lookup(name, max_price);

    if verbose {
        if let LookupOutcome::Found { alternatives, .. } = &outcome {
            eprintln!(
                "Matched '{name}' with {} alternative(s) sharing its active ingredient",
                alternatives.len()
            );
        }
    }

    match format {
        OutputFormat::Text => write_outcome(&mut std::io::stdout().lock(), &outcome)?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}
