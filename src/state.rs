use std::path::PathBuf;

use anyhow::Result;

use lfo_tools::data::compare::{Comparison, DEFAULT_THRESHOLD};
use lfo_tools::data::loader::load_pair;
use lfo_tools::data::model::Table;
use lfo_tools::layout::Layout;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which curve a [`Series`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Reference,
    Candidate,
    Difference,
}

impl SeriesKind {
    /// Legend label.
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Reference => "reference",
            SeriesKind::Candidate => "file",
            SeriesKind::Difference => "difference",
        }
    }
}

/// A polyline drawn in one subplot.
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<[f64; 2]>,
}

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Path of the file under test.
    pub file: PathBuf,
    /// Path of the reference file.
    pub reference: PathBuf,

    /// Loaded candidate table.
    pub data: Table,
    /// Loaded reference table (same shape as `data`).
    pub reference_data: Table,

    /// MSE summary of the pair, shown in the top bar and subplot titles.
    pub comparison: Comparison,

    /// Subplot arrangement for the current channel count.
    pub layout: Layout,

    /// Plot `candidate - reference` instead of the two curves.
    pub show_difference: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load both files. Any failure here aborts before a window is opened.
    pub fn load(file: PathBuf, reference: PathBuf) -> Result<Self> {
        let (data, reference_data) = load_pair(&file, &reference)?;
        let comparison = Comparison::new(&data, &reference_data, DEFAULT_THRESHOLD)?;
        let layout = Layout::for_channels(data.channel_count());

        log::info!(
            "Loaded {} channels over {} samples, MSE {:e}",
            data.channel_count(),
            data.rows(),
            comparison.mse
        );

        Ok(AppState {
            file,
            reference,
            data,
            reference_data,
            comparison,
            layout,
            show_difference: false,
            status_message: None,
        })
    }

    /// Re-read both files from disk, keeping the current tables on failure.
    pub fn reload(&mut self) {
        let result = load_pair(&self.file, &self.reference).and_then(|(data, reference)| {
            let comparison = Comparison::new(&data, &reference, DEFAULT_THRESHOLD)?;
            Ok((data, reference, comparison))
        });

        match result {
            Ok((data, reference_data, comparison)) => {
                log::info!("Reloaded tables, MSE {:e}", comparison.mse);
                self.layout = Layout::for_channels(data.channel_count());
                self.data = data;
                self.reference_data = reference_data;
                self.comparison = comparison;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to reload: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// MSE of a 0-based channel.
    pub fn channel_mse(&self, channel: usize) -> Option<f64> {
        self.comparison.channels.get(channel).map(|c| c.mse)
    }

    /// Curves to draw for a 0-based channel.
    pub fn series(&self, channel: usize) -> Vec<Series> {
        if self.show_difference {
            let points = self
                .data
                .time()
                .zip(self.data.channel(channel).zip(self.reference_data.channel(channel)))
                .map(|(t, (v, r))| [t, v - r])
                .collect();
            vec![Series {
                kind: SeriesKind::Difference,
                points,
            }]
        } else {
            vec![
                Series {
                    kind: SeriesKind::Reference,
                    points: self.reference_data.channel_points(channel),
                },
                Series {
                    kind: SeriesKind::Candidate,
                    points: self.data.channel_points(channel),
                },
            ]
        }
    }
}
