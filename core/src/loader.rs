//! Reads measurement files: one row per line, three whitespace-separated
//! numbers per row, no header.

use crate::dataset::{Column, Dataset, Measurement};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: {column} value '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: Column,
        token: String,
    },
    #[error("no rows to parse")]
    Empty,
}

/// Loads the whole file at `path` into memory.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_dataset(BufReader::new(file))?;
    log::debug!("loaded {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parses measurement rows from any buffered reader. Blank lines are skipped.
pub fn read_dataset(reader: impl BufRead) -> Result<Dataset, LoadError> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        rows.push(parse_row(&line, line_no)?);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Dataset::new(rows))
}

fn parse_row(line: &str, line_no: usize) -> Result<Measurement, LoadError> {
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
    if tokens.len() != Column::ALL.len() {
        return Err(LoadError::FieldCount {
            line: line_no,
            found: tokens.len(),
        });
    }

    let mut values = [0.0_f64; 3];
    for ((slot, token), column) in values.iter_mut().zip(&tokens).zip(Column::ALL) {
        *slot = parse_number(token).ok_or_else(|| LoadError::InvalidNumber {
            line: line_no,
            column,
            token: (*token).to_string(),
        })?;
    }

    Ok(Measurement::new(values[0], values[1], values[2]))
}

// NaN and infinities are rejected so every plotted point is drawable.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
