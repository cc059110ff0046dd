//! The activity log as a plain grid of text cells.
//!
//! Column layout (0-indexed):
//! - 0: date
//! - 1: activity label
//! - 2: general description
//! - 3: residents block, one resident per line
//! - 4..: free text, only scanned for cancellation

use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};
use tracing::warn;

pub const DATE_COLUMN: usize = 0;
pub const LABEL_COLUMN: usize = 1;
pub const DESCRIPTION_COLUMN: usize = 2;
pub const RESIDENTS_COLUMN: usize = 3;

/// Replaces newlines with spaces and trims.
pub fn clean_cell(cell: &str) -> String {
    cell.replace('\n', " ").trim().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell `index`, or `""` past the end of a short row.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn date_cell(&self) -> &str {
        self.cell(DATE_COLUMN)
    }

    pub fn label(&self) -> String {
        clean_cell(self.cell(LABEL_COLUMN))
    }

    pub fn description(&self) -> String {
        clean_cell(self.cell(DESCRIPTION_COLUMN))
    }

    /// Raw residents block; line breaks are significant.
    pub fn residents_block(&self) -> &str {
        self.cell(RESIDENTS_COLUMN)
    }

    /// Every cell of the row, cleaned and joined by a single space.
    /// `width` pads short rows so every row spans the table's full width.
    pub fn joined_text(&self, width: usize) -> String {
        (0..width.max(self.cells.len()))
            .map(|i| clean_cell(self.cell(i)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Every byte maps to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct ActivityTable {
    rows: Vec<TableRow>,
    width: usize,
}

impl ActivityTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            rows: rows.into_iter().map(TableRow::new).collect(),
            width,
        }
    }

    /// Reads a header-less CSV. Rows may have different lengths.
    ///
    /// Cells that are not valid UTF-8 are read as Latin-1, which covers the
    /// accented letters of Windows-1252 spreadsheet exports.
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut rows = Vec::new();
        let mut latin1_cells = 0usize;
        for (i, record) in csv_reader.byte_records().enumerate() {
            let record = record.with_context(|| format!("reading CSV record {}", i + 1))?;
            let row = record
                .iter()
                .map(|field| match std::str::from_utf8(field) {
                    Ok(text) => text.to_string(),
                    Err(_) => {
                        latin1_cells += 1;
                        decode_latin1(field)
                    }
                })
                .collect();
            rows.push(row);
        }
        if latin1_cells > 0 {
            warn!(cells = latin1_cells, "CSV is not UTF-8, decoded those cells as Latin-1");
        }
        Ok(Self::new(rows))
    }

    pub fn load(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Self::from_csv_reader(file, delimiter)
            .with_context(|| format!("parsing {}", path.display()))
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of columns of the widest row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
