use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – everything that can go wrong before numeric work starts
// ---------------------------------------------------------------------------

/// Fatal conditions raised while loading or pairing LFO tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// One of the input paths does not exist.
    #[error("The {role} does not exist: {}", path.display())]
    Missing { role: &'static str, path: PathBuf },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A row whose column count differs from the first data row.
    #[error(
        "{}:{line}: expected {expected} columns but found {found}",
        path.display()
    )]
    Ragged {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{} contains no data rows", path.display())]
    Empty { path: PathBuf },

    /// Shapes are `(rows, cols)`.
    #[error(
        "The shapes of the data and reference are different: {file:?} vs {reference:?}"
    )]
    ShapeMismatch {
        file: (usize, usize),
        reference: (usize, usize),
    },

    #[error("{} has a time column but no channels", path.display())]
    NoChannels { path: PathBuf },
}
