//! FleetMix CLI — fetch registration records and build weight-class reports.
//!
//! Commands:
//! - `fetch` — run the pagination loop only and dump raw records as JSON
//! - `report` — full pipeline: fetch, clean, aggregate, write CSV/JSON artifacts

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fleetmix_core::config::ReportConfig;
use fleetmix_core::data::{fetch_all, FetchOptions, FetchOutcome, SocrataProvider, StdoutProgress};
use fleetmix_core::export::{write_aggregate_csv, write_chart_json, write_summary_csv};
use fleetmix_core::pipeline::{aggregate, clean, summarize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fleetmix",
    about = "FleetMix CLI — vehicle registration weight-class analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch raw registration records and dump them as JSON.
    Fetch {
        /// Stop requesting pages once this many records are accumulated.
        #[arg(long)]
        max_records: Option<usize>,

        /// Page size per request.
        #[arg(long, default_value_t = 1000)]
        batch_size: usize,

        /// Pause between requests, in milliseconds.
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Output file for the raw records.
        #[arg(long, default_value = "records.json")]
        out: PathBuf,
    },
    /// Run the full pipeline and write the report artifacts.
    Report {
        /// Path to a TOML config file. Flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop requesting pages once this many records are accumulated.
        #[arg(long)]
        max_records: Option<usize>,

        /// Page size per request.
        #[arg(long)]
        batch_size: Option<usize>,

        /// Output directory for aggregate.csv, summary.csv, chart.json.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            max_records,
            batch_size,
            delay_ms,
            out,
        } => {
            let config = ReportConfig {
                max_records,
                batch_size,
                delay_ms,
                ..ReportConfig::default()
            };
            config.validate().context("invalid fetch options")?;

            let outcome = run_fetch(&config);
            let json = serde_json::to_string_pretty(&outcome.records)?;
            std::fs::write(&out, json)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Wrote {} records to {}", outcome.records.len(), out.display());

            report_completeness(&outcome)
        }
        Commands::Report {
            config,
            max_records,
            batch_size,
            out_dir,
        } => {
            let mut config = match config {
                Some(path) => ReportConfig::from_toml_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => ReportConfig::default(),
            };
            if max_records.is_some() {
                config.max_records = max_records;
            }
            if let Some(batch_size) = batch_size {
                config.batch_size = batch_size;
            }
            if let Some(out_dir) = out_dir {
                config.out_dir = out_dir;
            }
            config.validate().context("invalid report config")?;

            run_report(&config)
        }
    }
}

fn run_fetch(config: &ReportConfig) -> FetchOutcome {
    let provider = SocrataProvider::new(&config.endpoint, &config.predicate);
    let options = FetchOptions {
        max_records: config.max_records,
        batch_size: config.batch_size,
        delay: config.delay(),
    };
    fetch_all(&provider, &options, &StdoutProgress)
}

fn run_report(config: &ReportConfig) -> Result<()> {
    let outcome = run_fetch(config);
    if outcome.records.is_empty() {
        bail!("no records fetched; nothing to aggregate");
    }

    let cleaned = clean(&outcome.records);
    println!(
        "Cleaned {} of {} records ({} dropped or duplicate)",
        cleaned.len(),
        outcome.records.len(),
        outcome.records.len() - cleaned.len()
    );

    let aggregates = aggregate(&cleaned);
    let summary = summarize(&aggregates);

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    write_aggregate_csv(&config.out_dir.join("aggregate.csv"), &aggregates)?;
    write_summary_csv(&config.out_dir.join("summary.csv"), &summary)?;
    write_chart_json(
        &config.out_dir.join("chart.json"),
        &aggregates,
        outcome.complete,
    )?;

    println!(
        "Report written to {}: {} grid rows, {} vehicles total",
        config.out_dir.display(),
        aggregates.len(),
        summary.grand_total
    );

    report_completeness(&outcome)
}

/// Surface partial fetches loudly instead of conflating them with success.
fn report_completeness(outcome: &FetchOutcome) -> Result<()> {
    if outcome.complete {
        return Ok(());
    }
    let reason = outcome
        .last_error
        .as_ref()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown error".into());
    eprintln!(
        "WARNING: fetch aborted after {} batches; results are partial ({reason})",
        outcome.batches
    );
    bail!("fetch incomplete")
}
