// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Command-Line Harness
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! `decide <INPUT>` reads a JSON input document and prints `YES` when
//! launch is authorized, `NO` otherwise.
//!
//! Exit status is 0 for any decision. Usage errors and unreadable or
//! invalid input documents exit non-zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use decide_core::DecideKernel;
use decide_types::{DecideInput, PredicateMode};

#[derive(Parser, Debug)]
#[command(name = "decide")]
#[command(about = "Launch interceptor DECIDE: authorize or reject from a point sequence", long_about = None)]
struct Cli {
    /// Input document (PARAMETERS, points, LCM, PUV)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Also print every stage (CMV, PUM, FUV) as JSON
    #[arg(long)]
    report: bool,

    /// Override the document's predicate mode (reference | corrected)
    #[arg(long, value_name = "MODE")]
    mode: Option<PredicateMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Option<log::LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(log::LevelFilter::Info),
            2 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}

/// Load, validate and decide. Returns the text to print.
fn run(cli: &Cli) -> Result<String> {
    let mut input = DecideInput::from_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    if let Some(mode) = cli.mode {
        input.mode = mode;
    }
    input
        .validate()
        .with_context(|| format!("invalid input {}", cli.input.display()))?;

    let kernel = DecideKernel::from_input(&input);
    log::info!(
        "evaluating {} points in {:?} mode",
        input.points.len(),
        kernel.mode()
    );
    let report = kernel.evaluate_input(&input);
    log::info!(
        "decision: {} (unmet LICs {:?}, blocking {:?})",
        report.verdict(),
        report.unmet_conditions(),
        report.blocking_requirements()
    );

    if cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        Ok(format!("{}\n{json}", report.verdict()))
    } else {
        Ok(report.verdict().to_string())
    }
}
