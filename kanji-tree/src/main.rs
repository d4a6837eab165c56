//! kanji-tree - CJK decomposition query tool
//!
//! Loads the decomposition source and radical reference list, then
//! answers one query and prints the result as JSON (or a text dump).

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kanji_common::config::{load_config_or_default, DataPaths};
use kanji_common::radicals::{read_radical_values, validate_radicals};
use kanji_tree::{render, KanjiResources};
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line arguments for kanji-tree
#[derive(Parser, Debug)]
#[command(name = "kanji-tree")]
#[command(about = "Query the CJK ideograph decomposition database")]
#[command(version)]
struct Args {
    /// Tab-separated IDS decomposition source
    #[arg(long)]
    ids: Option<PathBuf>,

    /// Kangxi radical reference list (JSON)
    #[arg(long)]
    radicals: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "KANJI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full decomposition tree of a character
    Resolve {
        character: String,
        /// Print an indented text dump instead of JSON
        #[arg(long)]
        dump: bool,
    },
    /// Complexity metrics of a character
    Metrics { character: String },
    /// Metrics for every character in the database
    Corpus {
        /// Attach corpus percentile ranks
        #[arg(long)]
        normalized: bool,
    },
    /// Characters using a radical (canonical or variant glyph)
    Radical { glyph: String },
    /// Validate the radical reference list and print the report
    Validate,
}

fn single_glyph(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("expected exactly one character, got '{}'", text),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config_or_default(args.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting kanji-tree v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let paths = DataPaths::resolve(args.ids.as_deref(), args.radicals.as_deref(), &config);
    info!("IDS source: {}", paths.ids_source.display());
    info!("Radical reference: {}", paths.radicals.display());

    if let Command::Validate = args.command {
        let values = read_radical_values(&paths.radicals)
            .with_context(|| format!("Failed to read {}", paths.radicals.display()))?;
        let report = validate_radicals(&values);
        println!("{}", report);
        if !report.is_valid() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let resources = KanjiResources::load(&paths, config.metrics.clone())
        .context("Failed to load kanji resources")?;

    match args.command {
        Command::Resolve { character, dump } => {
            let tree = resources.resolve(single_glyph(&character)?)?;
            if dump {
                print!("{}", render::dump_tree(&tree));
            } else {
                println!("{}", serde_json::to_string_pretty(&tree)?);
            }
        }
        Command::Metrics { character } => {
            let metrics = resources.metrics(single_glyph(&character)?)?;
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        Command::Corpus { normalized } => {
            let failures = if normalized {
                let corpus = resources.normalized_metrics_for_corpus();
                println!("{}", serde_json::to_string_pretty(&corpus.metrics)?);
                corpus.failures
            } else {
                let corpus = resources.metrics_for_corpus();
                println!("{}", serde_json::to_string_pretty(&corpus.metrics)?);
                corpus.failures
            };
            for failure in &failures {
                warn!("Omitted '{}': {}", failure.character, failure.reason);
            }
        }
        Command::Radical { glyph } => {
            let glyph = single_glyph(&glyph)?;
            match resources.radicals_using(glyph) {
                Some(entry) => println!("{}", serde_json::to_string_pretty(entry)?),
                None => bail!("'{}' is not a known radical or radical variant", glyph),
            }
        }
        Command::Validate => {}
    }

    Ok(())
}
