//! credence-cli — Command-line front end for the Credence scoring engine.
//!
//! Scores metrics records read from JSON files (or stdin) and prints the
//! assessment together with factor analysis, suggestions and percentile.

mod config;
mod report;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use credence_core::traits::CreditScorer;
use credence_core::types::Metrics;
use credence_score::ScoringEngine;
use tracing::{debug, info, warn};

use crate::config::{CliConfig, LogFormat, OutputFormat};
use crate::report::{BatchReport, Rejection, Report};

/// Credence command-line scorer.
#[derive(Parser)]
#[command(name = "credence-cli")]
#[command(version, about = "Explainable credit scores from account activity metrics.")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Config file (default: <config_dir>/credence/credence.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format. Overrides the config file.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Report output format. Overrides the config file.
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Reference time in epoch milliseconds (default: now).
    ///
    /// Pins the activity recency adjustment for reproducible output.
    #[arg(long, global = true)]
    now: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single metrics JSON document ("-" reads stdin).
    Score(InputArgs),
    /// Score a JSON array of metrics documents ("-" reads stdin).
    Batch(InputArgs),
    /// Print the percentile estimate for a final score.
    Percentile(PercentileArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Path to the JSON input.
    file: PathBuf,
}

#[derive(Args)]
struct PercentileArgs {
    /// Final score to rank.
    score: u16,
}

impl GlobalArgs {
    /// Load the layered configuration and apply command-line overrides.
    fn into_config(self) -> Result<(CliConfig, Option<i64>)> {
        let loaded = CliConfig::load(self.config.as_deref()).with_context(|| match &self.config {
            Some(path) => format!("failed to load config {}", path.display()),
            None => "failed to load configuration".to_string(),
        })?;
        Ok(self.apply(loaded))
    }

    /// Flags given on the command line win over `loaded`.
    fn apply(self, loaded: CliConfig) -> (CliConfig, Option<i64>) {
        let config = CliConfig {
            log_level: self.log_level.unwrap_or(loaded.log_level),
            log_format: self.log_format.unwrap_or(loaded.log_format),
            output: self.output.unwrap_or(loaded.output),
        };
        (config, self.now)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, now) = cli.global.into_config()?;

    init_logging(&config.log_level, config.log_format);
    debug!(?config, "configuration loaded");

    let engine = ScoringEngine::new();

    match cli.command {
        Commands::Score(args) => score(&engine, &args.file, now, config.output),
        Commands::Batch(args) => batch(&engine, &args.file, now, config.output),
        Commands::Percentile(args) => {
            let p = engine.percentile(args.score);
            match config.output {
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "score": args.score, "percentile": p }))
                }
                OutputFormat::Text => println!("{p}"),
            }
            Ok(())
        }
    }
}

fn score(engine: &dyn CreditScorer, file: &Path, now: Option<i64>, output: OutputFormat) -> Result<()> {
    let input = read_input(file)?;
    let metrics: Metrics = serde_json::from_str(&input)
        .with_context(|| format!("failed to parse metrics from {}", file.display()))?;

    let assessment = match now {
        Some(now) => engine.score_at(&metrics, now),
        None => engine.score(&metrics),
    }
    .with_context(|| format!("cannot score {}", metrics.subject_id))?;

    info!(
        subject = %assessment.subject_id,
        score = assessment.final_score,
        risk = %assessment.risk_level,
        "scored"
    );

    let report = Report::build(engine, assessment);
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", report.render_text()),
    }
    Ok(())
}

fn batch(engine: &dyn CreditScorer, file: &Path, now: Option<i64>, output: OutputFormat) -> Result<()> {
    let input = read_input(file)?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&input)
        .with_context(|| format!("expected a JSON array of metrics in {}", file.display()))?;

    let batch = score_records(engine, records, now);
    info!(
        accepted = batch.accepted.len(),
        rejected = batch.rejected.len(),
        "batch complete"
    );

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&batch)?),
        OutputFormat::Text => print!("{}", batch.render_text()),
    }
    Ok(())
}

/// Score each record independently; failures are collected, not fatal.
///
/// Without `now`, one reference time is taken up front so every record in the
/// batch is judged against the same clock.
fn score_records(
    engine: &dyn CreditScorer,
    records: Vec<serde_json::Value>,
    now: Option<i64>,
) -> BatchReport {
    let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let subject_id = record
            .get("subjectId")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let result = serde_json::from_value::<Metrics>(record)
            .map_err(|e| e.to_string())
            .and_then(|m| engine.score_at(&m, now).map_err(|e| e.to_string()));

        match result {
            Ok(assessment) => accepted.push(Report::build(engine, assessment)),
            Err(reason) => {
                warn!(index, subject = ?subject_id, "record rejected: {}", reason);
                rejected.push(Rejection {
                    index,
                    subject_id,
                    reason,
                });
            }
        }
    }

    BatchReport { accepted, rejected }
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    if !file.exists() {
        bail!("input file not found: {}", file.display());
    }
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// `RUST_LOG` takes precedence over `level_str`. Logs go to stderr so report
/// output on stdout stays machine-readable.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
    }
}
