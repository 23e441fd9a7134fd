use serde::Serialize;

use super::error::TableError;
use super::model::Table;

/// Default pass/fail threshold on the overall MSE.
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

// ---------------------------------------------------------------------------
// Comparison result
// ---------------------------------------------------------------------------

/// MSE of a single channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelError {
    /// 1-based channel index, matching the plot titles.
    pub channel: usize,
    pub mse: f64,
}

/// Outcome of comparing a candidate table against a reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub rows: usize,
    pub cols: usize,
    /// MSE over every channel value of every sample.
    pub mse: f64,
    pub channels: Vec<ChannelError>,
    pub threshold: f64,
    pub passed: bool,
}

impl Comparison {
    /// Compare two tables of identical shape.
    pub fn new(data: &Table, reference: &Table, threshold: f64) -> Result<Self, TableError> {
        let mse = mean_squared_error(data, reference)?;
        let channels = (0..data.channel_count())
            .map(|ch| ChannelError {
                channel: ch + 1,
                mse: mean_squared_error_of(data.channel(ch), reference.channel(ch)),
            })
            .collect();
        let (rows, cols) = data.shape();

        Ok(Comparison {
            rows,
            cols,
            mse,
            channels,
            threshold,
            passed: passes(mse, threshold),
        })
    }
}

// ---------------------------------------------------------------------------
// Numeric reductions
// ---------------------------------------------------------------------------

/// Mean of the element-wise squared difference over all channels combined.
///
/// The time column is not part of the error.
pub fn mean_squared_error(data: &Table, reference: &Table) -> Result<f64, TableError> {
    if data.shape() != reference.shape() {
        return Err(TableError::ShapeMismatch {
            file: data.shape(),
            reference: reference.shape(),
        });
    }
    Ok(mean_squared_error_of(
        data.channel_values(),
        reference.channel_values(),
    ))
}

fn mean_squared_error_of(a: impl Iterator<Item = f64>, b: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = a.zip(b).fold((0.0, 0usize), |(sum, n), (x, y)| {
        let diff = x - y;
        (sum + diff * diff, n + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `mse <= threshold`; NaN never passes.
pub fn passes(mse: f64, threshold: f64) -> bool {
    mse <= threshold
}
