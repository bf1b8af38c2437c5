use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use deckforge::prelude::*;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "deck-inspect")]
#[command(author, version, about = "Decode deckstrings and print the decks they contain")]
struct Args {
    /// Deckstrings to decode. Read from stdin (one per line) when omitted.
    deckstrings: Vec<String>,

    /// Print JSON instead of a text listing
    #[arg(long)]
    json: bool,

    /// JSON card list used to name card ids
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// JSON inspector config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Deckstrings from stdin: one per line, blank lines and `#` comments
/// skipped.
fn deckstrings_from(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

fn build_inspector(args: &Args) -> Result<DeckInspector<JsonCatalog>, DeckforgeError> {
    let config = match &args.config {
        Some(path) => InspectConfig::from_path(path)?,
        None => InspectConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => JsonCatalog::from_path(path)?,
        None => JsonCatalog::default(),
    };
    Ok(DeckInspector::builder().config(config).catalog(catalog).build())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only reports.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let inspector = build_inspector(&args)?;

    let inputs = if args.deckstrings.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        deckstrings_from(&input)
    } else {
        args.deckstrings.iter().map(|s| s.trim().to_string()).collect()
    };
    tracing::debug!(count = inputs.len(), "deckstrings to inspect");

    let mut failures = 0usize;
    for (i, deckstring) in inputs.iter().enumerate() {
        match inspector.inspect(deckstring) {
            Ok(report) if args.json => println!("{}", report.to_json()?),
            Ok(report) => {
                if i > 0 {
                    println!();
                }
                println!("{report}");
            }
            Err(e) => {
                failures += 1;
                eprintln!("error: {e}");
            }
        }
    }

    if failures > 0 {
        tracing::warn!(failures, total = inputs.len(), "some deckstrings failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
