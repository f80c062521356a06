use clap::Parser;
use tracing_subscriber::EnvFilter;

use medfinder::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("medfinder=debug,info")
    } else {
        EnvFilter::new("medfinder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let source = cli.data_source();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, &source, cli.format, cli.verbose)?;
        }
        cli::Commands::Interactive(args) => {
            cli::interactive::run(args, &source, cli.verbose)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, &source, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
