use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lfo_tools::data::compare::{Comparison, DEFAULT_THRESHOLD};
use lfo_tools::data::loader::load_pair;

/// Exit status on a failed comparison (-1 as seen by the shell).
const FAILURE: u8 = 255;

/// Compare 2 files as outputted by the LFO plotting tool.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The file to test
    file: PathBuf,
    /// The reference file
    reference: PathBuf,
    /// Largest mean squared error still accepted
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Also write the full comparison as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let (data, reference) = load_pair(&args.file, &args.reference)?;
    let comparison = Comparison::new(&data, &reference, args.threshold)?;

    for ch in &comparison.channels {
        log::info!("LFO {}: MSE {:e}", ch.channel, ch.mse);
    }
    println!("MSE difference: {:?}", comparison.mse);

    if let Some(path) = &args.report {
        let file = File::create(path)
            .with_context(|| format!("creating report {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &comparison)
            .context("writing JSON report")?;
        log::debug!("Wrote report to {}", path.display());
    }

    if comparison.passed {
        Ok(ExitCode::SUCCESS)
    } else {
        log::warn!(
            "MSE {:?} exceeds threshold {:?}",
            comparison.mse,
            comparison.threshold
        );
        Ok(ExitCode::from(FAILURE))
    }
}
