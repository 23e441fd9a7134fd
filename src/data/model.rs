use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Table – one loaded LFO recording
// ---------------------------------------------------------------------------

/// A rectangular table of samples as written by the LFO generator.
///
/// Column 0 is the time axis, columns `1..cols` are the channel values.
/// Values are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// File the table was read from (empty for in-memory tables).
    pub source: PathBuf,
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Table {
    /// Build a table from row-major values.
    ///
    /// Callers guarantee `values.len() == rows * cols`; the loader is the only
    /// producer outside of tests.
    pub(crate) fn from_raw(source: &Path, rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Table {
            source: source.to_path_buf(),
            rows,
            cols,
            values,
        }
    }

    /// Convenience constructor used by tests and the plot state.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let values = rows.iter().flatten().copied().collect();
        Some(Table::from_raw(Path::new(""), rows.len(), cols, values))
    }

    /// `(rows, cols)`, in the same order numpy reports it.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of signal channels (time column excluded).
    pub fn channel_count(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    /// All values, row-major.
    #[cfg(test)]
    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Iterate over one column.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().skip(col).step_by(self.cols).copied()
    }

    /// Every channel value (time column skipped), row-major.
    pub fn channel_values(&self) -> impl Iterator<Item = f64> + '_ {
        let cols = self.cols;
        self.values
            .iter()
            .enumerate()
            .filter(move |(i, _)| i % cols != 0)
            .map(|(_, v)| *v)
    }

    /// The time axis.
    pub fn time(&self) -> impl Iterator<Item = f64> + '_ {
        self.column(0)
    }

    /// Values of a 0-based channel (i.e. column `channel + 1`).
    pub fn channel(&self, channel: usize) -> impl Iterator<Item = f64> + '_ {
        self.column(channel + 1)
    }

    /// `[time, value]` pairs of a channel, ready for plotting.
    pub fn channel_points(&self, channel: usize) -> Vec<[f64; 2]> {
        self.time()
            .zip(self.channel(channel))
            .map(|(t, v)| [t, v])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(&[
            vec![0.0, 1.0, -1.0],
            vec![0.5, 2.0, -2.0],
            vec![1.0, 3.0, -3.0],
        ])
        .unwrap()
    }

    #[test]
    fn shape_and_channels() {
        let t = sample();
        assert_eq!(t.shape(), (3, 3));
        assert_eq!(t.channel_count(), 2);
    }

    #[test]
    fn column_access() {
        let t = sample();
        assert_eq!(t.time().collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
        assert_eq!(t.channel(1).collect::<Vec<_>>(), vec![-1.0, -2.0, -3.0]);
        assert_eq!(t.get(1, 1), 2.0);
        assert_eq!(
            t.channel_values().collect::<Vec<_>>(),
            vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0]
        );
        assert_eq!(t.channel_points(0), vec![[0.0, 1.0], [0.5, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty() {
        assert!(Table::from_rows(&[]).is_none());
        assert!(Table::from_rows(&[vec![]]).is_none());
        assert!(Table::from_rows(&[vec![0.0, 1.0], vec![1.0]]).is_none());
    }
}
