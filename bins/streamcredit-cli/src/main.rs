//! streamcredit: Benford fraud screening and credit scoring from the shell.
//!
//! Reads merchant transaction amounts from a file (JSON array, CSV with an
//! `Amount` column, or one number per line), or generates a synthetic
//! history, and prints the assessment as JSON or a short text summary.

mod input;
mod report;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use streamcredit_core::traits::{CreditScorer, FraudAnalyzer};
use streamcredit_risk::synthetic::{self, Order, Profile};
use streamcredit_risk::RiskEngine;
use tracing::info;

/// StreamCredit risk engine command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "streamcredit",
    version,
    about = "Benford's Law fraud detection and credit scoring"
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fraud probability above which a history is flagged (0-100).
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Result output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run Benford fraud analysis on an amount file.
    Fraud(FileArgs),
    /// Run the full credit assessment on an amount file.
    Credit(FileArgs),
    /// Generate a synthetic history and assess it.
    Demo(SyntheticArgs),
    /// Write a synthetic order history as CSV.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct FileArgs {
    /// Amount file: JSON array, CSV with an Amount column, or one per line.
    file: PathBuf,
}

#[derive(Args, Debug)]
struct SyntheticArgs {
    /// Merchant profile: honest or wash-trading.
    profile: Profile,

    /// Number of orders to generate.
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// RNG seed for reproducible output.
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    synthetic: SyntheticArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SyntheticArgs {
    fn orders(&self) -> Vec<Order> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        synthetic::generate_orders(self.profile, self.count, Utc::now(), &mut rng)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let mut scoring = settings::load(cli.config.as_deref())?;
    if let Some(threshold) = cli.threshold {
        scoring.fraud_threshold = threshold;
    }
    let engine = RiskEngine::new(scoring).context("invalid scoring configuration")?;

    match &cli.command {
        Commands::Fraud(args) => {
            let amounts = read_amounts(&args.file)?;
            let fraud = engine
                .assess_fraud(&amounts)
                .with_context(|| format!("fraud analysis of {} failed", args.file.display()))?;
            emit(cli.format, serde_json::to_value(&fraud)?, || report::fraud_text(&fraud))
        }
        Commands::Credit(args) => {
            let amounts = read_amounts(&args.file)?;
            let credit = engine
                .assess_credit(&amounts)
                .with_context(|| format!("credit assessment of {} failed", args.file.display()))?;
            emit(cli.format, serde_json::to_value(&credit)?, || report::credit_text(&credit))
        }
        Commands::Demo(args) => {
            let orders = args.orders();
            info!(profile = %args.profile, count = orders.len(), "demo: generated orders");
            let credit = engine
                .assess_credit(&synthetic::amounts(&orders))
                .context("demo assessment failed")?;
            emit(cli.format, serde_json::to_value(&credit)?, || report::credit_text(&credit))
        }
        Commands::Generate(args) => {
            let orders = args.synthetic.orders();
            let csv = synthetic::orders_to_csv(&orders, args.synthetic.profile);
            match &args.output {
                Some(path) => {
                    fs::write(path, csv)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), count = orders.len(), "generate: wrote orders");
                }
                None => print!("{csv}"),
            }
            Ok(())
        }
    }
}

fn read_amounts(path: &Path) -> Result<Vec<f64>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let amounts = input::parse_amounts(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(path = %path.display(), count = amounts.len(), "loaded amounts");
    Ok(amounts)
}

fn emit(format: OutputFormat, json: Value, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&json)?),
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so results on stdout stay machine-readable. `RUST_LOG`
/// takes precedence over `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
