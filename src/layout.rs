// ---------------------------------------------------------------------------
// Subplot layout for the channel overlay window
// ---------------------------------------------------------------------------

/// Maximum number of subplots placed side by side.
pub const MAX_COLUMNS: usize = 4;

/// Grid of subplot cells. Each cell holds a 0-based channel index or is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    /// Whether cells get an `LFO <k>` title (off for the single-plot case).
    pub titled: bool,
    cells: Vec<Option<usize>>,
}

impl Layout {
    /// Lay out `channels` subplots.
    ///
    /// * 1 channel → one full-size plot
    /// * 2..=4     → one row
    /// * more      → 4 columns, as many rows as needed; the last row may have
    ///   empty cells
    pub fn for_channels(channels: usize) -> Self {
        let (rows, cols) = match channels {
            0 => (0, 0),
            n if n <= MAX_COLUMNS => (1, n),
            n => (n.div_ceil(MAX_COLUMNS), MAX_COLUMNS),
        };
        let cells = (0..rows * cols)
            .map(|i| (i < channels).then_some(i))
            .collect();
        Layout {
            rows,
            cols,
            titled: channels > 1,
            cells,
        }
    }

    /// Channel shown at `(row, col)`, if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Row height that splits `available` between all rows, but never
    /// below `min_height`.
    pub fn row_height(&self, available: f32, spacing: f32, min_height: f32) -> f32 {
        if self.rows == 0 {
            return min_height;
        }
        let gaps = spacing * (self.rows - 1) as f32;
        ((available - gaps) / self.rows as f32).max(min_height)
    }

    /// Total height of all rows at `row_height`. When this exceeds the panel
    /// the grid has to scroll.
    pub fn content_height(&self, row_height: f32, spacing: f32) -> f32 {
        if self.rows == 0 {
            return 0.0;
        }
        row_height * self.rows as f32 + spacing * (self.rows - 1) as f32
    }

    /// Channels in display order.
    #[cfg(test)]
    fn channels(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().flatten().copied()
    }
}

/// Title of a subplot for a 0-based channel.
pub fn channel_title(channel: usize) -> String {
    format!("LFO {}", channel + 1)
}
