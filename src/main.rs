use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cutquote::operations::pricing::{format_cost, QuoteBatch, SchemaQuote};
use cutquote::{PricingConfig, QuoteError, Schema};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cutquote", about = "Price laser-cut parts from line and arc schemas")]
struct Cli {
    /// Schema JSON files to quote
    #[arg(required = true)]
    schemas: Vec<PathBuf>,

    /// Pricing constants (JSON); missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print full quotes as JSON instead of one price per line
    #[arg(long)]
    json: bool,
}

/// One line of `--json` output.
#[derive(Serialize)]
#[serde(untagged)]
enum Report<'a> {
    Quote(&'a SchemaQuote),
    Failure { name: &'a str, error: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => match PricingConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => PricingConfig::default(),
    };

    // Files that fail to load keep their slot so output follows the
    // command line order.
    let mut loaded: Vec<(String, Schema)> = Vec::with_capacity(cli.schemas.len());
    let mut slots: Vec<(String, Option<QuoteError>)> = Vec::with_capacity(cli.schemas.len());
    for path in &cli.schemas {
        let name = path.display().to_string();
        match Schema::load(path) {
            Ok(schema) => {
                loaded.push((name.clone(), schema));
                slots.push((name, None));
            }
            Err(e) => slots.push((name.clone(), Some(e.named(name)))),
        }
    }

    let quotes = match QuoteBatch::new(&loaded, &config).execute() {
        Ok(quotes) => quotes,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut quotes = quotes.into_iter();
    let results: Vec<(String, Result<SchemaQuote, QuoteError>)> = slots
        .into_iter()
        .filter_map(|(name, load_error)| match load_error {
            Some(e) => Some((name, Err(e))),
            None => quotes.next().map(|q| (name, q)),
        })
        .collect();

    let failed = results.iter().any(|(_, r)| r.is_err());
    if cli.json {
        let reports: Vec<Report<'_>> = results
            .iter()
            .map(|(name, result)| match result {
                Ok(quote) => Report::Quote(quote),
                Err(e) => Report::Failure {
                    name,
                    error: e.to_string(),
                },
            })
            .collect();
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("failed to encode quotes: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for (name, result) in &results {
            match result {
                Ok(quote) => println!("{name} {}", format_cost(quote.total)),
                Err(e) => println!("{e}"),
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
