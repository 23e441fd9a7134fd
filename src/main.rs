mod app;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use app::LfoPlotApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

/// Plot 2 files as outputted by the LFO plotting tool, one subplot per LFO.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The file to test
    file: PathBuf,
    /// The reference file
    reference: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let state = AppState::load(args.file, args.reference)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LFO Plot",
        options,
        Box::new(move |_cc| Ok(Box::new(LfoPlotApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running plot window: {e}"))
}
