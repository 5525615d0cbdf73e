//! csv2json CLI
//!
//! Converts a CSV file into a JSON array of records.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::convert::Overrides;

/// csv2json - Convert CSV files to JSON
#[derive(Parser)]
#[command(name = "csv2json")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file to read
    #[arg(short, long)]
    input: Option<String>,

    /// JSON file to write
    #[arg(short, long)]
    output: Option<String>,

    /// Options file (YAML)
    #[arg(short, long)]
    config: Option<String>,

    /// Field delimiter (overrides the options file)
    #[arg(short, long, env = "CSV2JSON_DELIMITER")]
    delimiter: Option<char>,

    /// Quote character (overrides the options file)
    #[arg(short, long, env = "CSV2JSON_QUOTE")]
    quote: Option<char>,

    /// Write compact JSON instead of indenting
    #[arg(long)]
    compact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let overrides = Overrides {
        delimiter: cli.delimiter,
        quote: cli.quote,
        compact: cli.compact,
    };

    commands::convert::run(
        cli.input.as_deref(),
        cli.output.as_deref(),
        cli.config.as_deref(),
        &overrides,
    )
    .await
}
