use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Expected number of data columns in a production CSV row:
/// Basin, Field, Well, Year, Oil (m³).
pub const CSV_ROW_LENGTH: usize = 5;

/// Delimiter used by the normalized production export.
pub const EXPORT_DELIMITER: u8 = b',';

/// Delimiter used by the raw ANP download.
pub const RAW_DELIMITER: u8 = b';';

/// Errors that can occur when parsing production records.
///
/// Any bad row rejects the dataset wholesale; there is no partial load.
#[derive(Debug, PartialEq, Clone)]
pub enum RecordError {
    /// A row had the wrong number of columns.
    RowLength { line: u64, len: usize },
    /// The volume cell could not be coerced to a number.
    NonNumericVolume { line: u64, value: String },
    /// The year cell was not a calendar year.
    BadYear { line: u64, value: String },
    /// The CSV reader itself failed on malformed input.
    Csv(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::RowLength { line, len } => {
                write!(f, "line {line}: expected {CSV_ROW_LENGTH} columns, got {len}")
            }
            RecordError::NonNumericVolume { line, value } => {
                write!(f, "line {line}: non-numeric volume {value:?}")
            }
            RecordError::BadYear { line, value } => {
                write!(f, "line {line}: bad year {value:?}")
            }
            RecordError::Csv(msg) => write!(f, "csv error: {msg}"),
        }
    }
}

impl std::error::Error for RecordError {}

/// A single per-well, per-year oil production record from an ANP report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub basin: String,
    pub field: String,
    pub well: String,
    pub year: i32,
    /// Oil production volume in m³.
    pub volume: f64,
}

impl ProductionRecord {
    /// Parse a normalized (comma-delimited) production CSV string.
    pub fn parse_production_csv(csv_object: &str) -> Result<Vec<ProductionRecord>, RecordError> {
        Self::parse_production_csv_delimited(csv_object, EXPORT_DELIMITER)
    }

    /// Parse a production CSV string with an explicit delimiter.
    ///
    /// The raw ANP download uses `;`, the normalized export uses `,`. A
    /// leading unnamed index column (as written by spreadsheet exports) is
    /// tolerated and skipped.
    pub fn parse_production_csv_delimited(
        csv_object: &str,
        delimiter: u8,
    ) -> Result<Vec<ProductionRecord>, RecordError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row.map_err(|e| RecordError::Csv(e.to_string()))?;
            records.push(row.try_into()?);
        }
        Ok(records)
    }

    /// Group a vector of records by basin name.
    pub fn vector_to_hashmap(
        vec_records: Vec<ProductionRecord>,
    ) -> HashMap<String, Vec<ProductionRecord>> {
        let mut result: HashMap<String, Vec<ProductionRecord>> = HashMap::new();
        for record in vec_records {
            result.entry(record.basin.clone()).or_default().push(record);
        }
        result
    }
}

/// Coerce a volume cell to f64. ANP exports sometimes carry a decimal
/// comma; a cell that parses under neither convention is a hard error.
fn parse_volume(cell: &str, line: u64) -> Result<f64, RecordError> {
    let trimmed = cell.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        return Ok(v);
    }
    if trimmed.contains(',') {
        if let Ok(v) = trimmed.replace('.', "").replace(',', ".").parse::<f64>() {
            return Ok(v);
        }
    }
    Err(RecordError::NonNumericVolume {
        line,
        value: cell.to_string(),
    })
}

impl TryFrom<StringRecord> for ProductionRecord {
    type Error = RecordError;

    fn try_from(value: StringRecord) -> Result<Self, Self::Error> {
        let line = value.position().map_or(0, |p| p.line());
        // Spreadsheet exports prepend an unnamed row-index column.
        let offset = match value.len() {
            n if n == CSV_ROW_LENGTH => 0,
            n if n == CSV_ROW_LENGTH + 1 => 1,
            n => return Err(RecordError::RowLength { line, len: n }),
        };
        let cell = |i: usize| value.get(offset + i).unwrap_or("").trim();

        let year_cell = cell(3);
        let year = year_cell
            .parse::<i32>()
            .map_err(|_| RecordError::BadYear {
                line,
                value: year_cell.to_string(),
            })?;
        let volume = parse_volume(cell(4), line)?;

        Ok(ProductionRecord {
            basin: cell(0).to_string(),
            field: cell(1).to_string(),
            well: cell(2).to_string(),
            year,
            volume,
        })
    }
}
