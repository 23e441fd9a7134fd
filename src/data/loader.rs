use std::path::Path;

use super::error::TableError;
use super::model::Table;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric table from disk.
///
/// Layout, one sample per line:
///
/// ```text
/// # time  lfo1      lfo2
/// 0       0         1
/// 2.27e-05 0.000142 0.99999
/// ```
///
/// `#` starts a comment; blank and comment-only lines are skipped.
pub fn load_table(path: &Path) -> Result<Table, TableError> {
    let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(path, &text)?;
    log::debug!(
        "Loaded {} with shape {:?}",
        path.display(),
        table.shape()
    );
    Ok(table)
}

/// Load the candidate and reference tables as one checked pair.
///
/// Both paths are checked for existence before either is parsed, the two
/// tables must share a shape, and they must hold at least one channel besides
/// time.
pub fn load_pair(file: &Path, reference: &Path) -> Result<(Table, Table), TableError> {
    ensure_exists(file, "file to test")?;
    ensure_exists(reference, "reference file")?;

    let reference_data = load_table(reference)?;
    let data = load_table(file)?;

    if reference_data.shape() != data.shape() {
        return Err(TableError::ShapeMismatch {
            file: data.shape(),
            reference: reference_data.shape(),
        });
    }
    if reference_data.channel_count() == 0 {
        return Err(TableError::NoChannels {
            path: reference.to_path_buf(),
        });
    }
    Ok((data, reference_data))
}

fn ensure_exists(path: &Path, role: &'static str) -> Result<(), TableError> {
    if path.exists() {
        Ok(())
    } else {
        Err(TableError::Missing {
            role,
            path: path.to_path_buf(),
        })
    }
}

// ---------------------------------------------------------------------------
// Text parser
// ---------------------------------------------------------------------------

/// Parse table text. `path` is only used for error messages.
pub fn parse_table(path: &Path, text: &str) -> Result<Table, TableError> {
    let mut values = Vec::new();
    let mut cols = 0usize;
    let mut rows = 0usize;

    for (i, raw_line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        let before = values.len();
        for tok in line.split_whitespace() {
            let v = tok.parse::<f64>().map_err(|_| TableError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                token: tok.to_string(),
            })?;
            values.push(v);
        }

        let found = values.len() - before;
        if found == 0 {
            continue;
        }
        if rows == 0 {
            cols = found;
        } else if found != cols {
            return Err(TableError::Ragged {
                path: path.to_path_buf(),
                line: line_no,
                expected: cols,
                found,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(TableError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(Table::from_raw(path, rows, cols, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str) -> Result<Table, TableError> {
        parse_table(Path::new("test.dat"), text)
    }

    #[test]
    fn parses_mixed_whitespace() {
        let t = parse("0 1\t2\n0.5   3  4\r\n").unwrap();
        assert_eq!(t.shape(), (2, 3));
        assert_eq!(t.values(), &[0.0, 1.0, 2.0, 0.5, 3.0, 4.0]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let t = parse("# time lfo1\n\n0 1 # first\n   \n1 -1e-3\n# trailer").unwrap();
        assert_eq!(t.shape(), (2, 2));
        assert_eq!(t.get(1, 1), -0.001);
    }

    #[test]
    fn accepts_nan_and_inf_tokens() {
        let t = parse("0 nan\n1 inf\n").unwrap();
        assert!(t.get(0, 1).is_nan());
        assert_eq!(t.get(1, 1), f64::INFINITY);
    }

    #[test]
    fn single_row_keeps_two_dimensions() {
        let t = parse("0 1 2 3").unwrap();
        assert_eq!(t.shape(), (1, 4));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        match parse("0 1\n1 abc\n") {
            Err(TableError::Parse { line, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        match parse("0 1 2\n\n1 2\n") {
            Err(TableError::Ragged {
                line,
                expected,
                found,
                ..
            }) => {
                assert_eq!((line, expected, found), (3, 3, 2));
            }
            other => panic!("expected ragged error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse(""), Err(TableError::Empty { .. })));
        assert!(matches!(parse("# only\n\n"), Err(TableError::Empty { .. })));
    }

    #[test]
    fn load_pair_checks_existence_before_parsing() {
        let dir = tempfile::tempdir().unwrap();
        // Unparseable on purpose: must never be read when the other is missing.
        let garbage = dir.path().join("garbage.dat");
        std::fs::write(&garbage, "not a table").unwrap();
        let missing = dir.path().join("missing.dat");

        match load_pair(&garbage, &missing) {
            Err(TableError::Missing { role, path }) => {
                assert_eq!(role, "reference file");
                assert_eq!(path, missing);
            }
            other => panic!("expected missing error, got {other:?}"),
        }
        match load_pair(&missing, &garbage) {
            Err(TableError::Missing { role, .. }) => assert_eq!(role, "file to test"),
            other => panic!("expected missing error, got {other:?}"),
        }
    }

    #[test]
    fn load_pair_rejects_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.dat");
        let b = dir.path().join("b.dat");
        std::fs::File::create(&a)
            .unwrap()
            .write_all(b"0 1\n1 1\n2 1\n")
            .unwrap();
        std::fs::File::create(&b)
            .unwrap()
            .write_all(b"0 1\n1 1\n")
            .unwrap();

        match load_pair(&a, &b) {
            Err(TableError::ShapeMismatch { file, reference }) => {
                assert_eq!(file, (3, 2));
                assert_eq!(reference, (2, 2));
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn load_pair_rejects_time_only_tables() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.dat");
        let b = dir.path().join("b.dat");
        std::fs::write(&a, "0\n1\n").unwrap();
        std::fs::write(&b, "0\n1\n").unwrap();

        assert!(matches!(
            load_pair(&a, &b),
            Err(TableError::NoChannels { .. })
        ));
    }

    #[test]
    fn load_pair_returns_candidate_first() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.dat");
        let b = dir.path().join("b.dat");
        std::fs::write(&a, "0 5\n").unwrap();
        std::fs::write(&b, "0 7\n").unwrap();

        let (data, reference) = load_pair(&a, &b).unwrap();
        assert_eq!(data.get(0, 1), 5.0);
        assert_eq!(reference.get(0, 1), 7.0);
        assert_eq!(data.source, a);
    }
}
