//! `mirex-eval`: score a listing of key estimates
//!
//! Usage:
//!   mirex-eval [--json] [--summary-only] [--debug] <INPUT>
//!
//! Each input line is `<truth>-<field>-<label>;<estimate>`, e.g.
//! `8B-x-trackA.wav;9B`. Diagnostics go to stderr; stdout carries only the
//! report.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use mirex_eval::{evaluate_file, EvaluationConfig, ReportFormat};

#[derive(Parser)]
#[command(name = "mirex-eval")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Score Camelot key estimates with the MIREX key metric", long_about = None)]
struct Cli {
    /// Listing file: one `<truth>-<field>-<label>;<estimate>` record per line
    input: PathBuf,

    /// Emit one JSON object per line (JSONL) instead of text
    #[arg(long)]
    json: bool,

    /// Only print the summary
    #[arg(long)]
    summary_only: bool,

    /// Log per-record details to stderr
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = EvaluationConfig {
        format: if cli.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        },
        emit_records: !cli.summary_only,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = evaluate_file(&cli.input, config, &mut out)
        .with_context(|| format!("failed to evaluate {}", cli.input.display()))?;
    out.flush().context("failed to write report")?;

    log::debug!(
        "Evaluated {} records from {}",
        summary.record_count,
        cli.input.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
