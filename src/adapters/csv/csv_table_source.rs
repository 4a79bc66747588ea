//! CSV Table Source Adapter
//!
//! Reads a payoff table laid out one alternative per column and one state
//! of nature per row:
//!
//! ```text
//! <ignored>,<name1>,<name2>,...
//! <ignored>,<v1_state0>,<v2_state0>,...
//! <ignored>,<v1_state1>,<v2_state1>,...
//! ```
//!
//! No quoting or escaping is supported. Only the first two data rows are
//! kept.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::payoff::{Alternative, PayoffTable, StateOfNature};
use crate::ports::TableSource;

/// File read when no other path is given.
pub const DEFAULT_TABLE_FILE: &str = "how_to_expand.csv";

const DELIMITER: char = ',';

/// Errors reading the table file. Never escapes `load_table`.
#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("Failed to read payoff table {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Payoff table source backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    path: PathBuf,
}

impl CsvTableSource {
    /// Create a source for the given file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file, surfacing I/O failures.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// rejected, so a readable file always yields its alternatives.
    pub fn read(&self) -> Result<PayoffTable, TableLoadError> {
        debug!(path = %self.path.display(), "Reading payoff table");
        let bytes = fs::read(&self.path).map_err(|source| TableLoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Parses table content.
    ///
    /// # Edge Cases
    /// - Header with fewer than two cells: Returns an empty table
    /// - Blank lines and lines with fewer than two cells: Skipped
    /// - Fewer than two data rows: Missing outcomes stay 0.0
    /// - More than two data rows: Extra rows are ignored
    /// - Non-integer cell: Read as 0.0
    pub fn parse(content: &str) -> PayoffTable {
        let mut lines = content.lines();

        let Some(header) = lines.next() else {
            debug!("Payoff table is empty");
            return PayoffTable::empty();
        };

        let header_cells = split_cells(header);
        if header_cells.len() < 2 {
            debug!(cells = header_cells.len(), "Header names no alternatives");
            return PayoffTable::empty();
        }

        let mut alternatives: Vec<Alternative> = header_cells[1..]
            .iter()
            .map(|name| Alternative::named(*name))
            .collect();

        let mut row_index = 0;
        for line in lines {
            if line.is_empty() {
                continue;
            }

            let cells = split_cells(line);
            if cells.len() < 2 {
                continue;
            }

            match StateOfNature::from_row(row_index) {
                Some(state) => {
                    for (alternative, cell) in alternatives.iter_mut().zip(&cells[1..]) {
                        alternative.set_outcome(state, parse_outcome(cell));
                    }
                }
                None => {
                    debug!(row = row_index, label = cells[0], "Ignoring extra state row");
                }
            }
            row_index += 1;
        }

        PayoffTable::new(alternatives)
    }
}

impl Default for CsvTableSource {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_FILE)
    }
}

impl TableSource for CsvTableSource {
    fn load_table(&self) -> PayoffTable {
        match self.read() {
            Ok(table) => table,
            Err(e) => {
                warn!("{}; continuing with an empty table", e);
                PayoffTable::empty()
            }
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Splits a line into trimmed cells. A trailing delimiter does not add an empty cell.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if line.ends_with(DELIMITER) {
        cells.pop();
    }
    cells
}

/// Reads the leading integer of a cell, falling back to 0.0.
fn parse_outcome(cell: &str) -> f64 {
    match leading_integer(cell) {
        Some(value) => f64::from(value),
        None => {
            debug!(cell, "Outcome is not an integer, using 0.0");
            0.0
        }
    }
}

/// Optional sign followed by at least one digit; anything after the digits is dropped.
fn leading_integer(cell: &str) -> Option<i32> {
    let unsigned = cell.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(cell);
    let sign_len = cell.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    cell[..sign_len + digits].parse().ok()
}
