//! tsd-rewrite - one-shot tone rewriter
//!
//! Prints the rewritten text, or with `--report` a JSON report holding both
//! texts and their sentiment readings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tsd_common::config::{self, TomlConfig};
use tsd_common::tone::ToneTables;
use tsd_common::{LexiconOracle, TargetTone, ToneRewriter};

/// Command-line arguments for tsd-rewrite
#[derive(Parser, Debug)]
#[command(name = "tsd-rewrite")]
#[command(about = "Rewrite a post toward a target tone")]
#[command(version)]
struct Args {
    /// Post text
    text: String,

    /// KeepCurrent, MakePositive, MakeNegative or MakeNeutral
    #[arg(short, long, default_value = "MakePositive")]
    tone: String,

    /// Print a JSON report with readings for both texts
    #[arg(short, long)]
    report: bool,

    /// Config file (TOML); only `rewriter.tables_path` is used
    #[arg(short, long, env = "TSD_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // stdout carries the result, so logs go to stderr and stay quiet by default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let tone: TargetTone = args.tone.parse()?;

    let toml_config = match config::resolve_config_path(args.config.as_deref(), config::CONFIG_ENV) {
        Some(path) => TomlConfig::load_or_default(&path)?,
        None => TomlConfig::default(),
    };
    let tables = match &toml_config.rewriter.tables_path {
        Some(path) => ToneTables::load(path)
            .with_context(|| format!("Failed to load tone tables {}", path.display()))?,
        None => ToneTables::builtin(),
    };
    let rewriter = ToneRewriter::with_tables(tables);
    debug!("Rewriting toward {}", tone);

    if args.report {
        let report = rewriter.report(&LexiconOracle::new(), &args.text, tone);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", rewriter.rewrite(&args.text, tone));
    }

    Ok(())
}
