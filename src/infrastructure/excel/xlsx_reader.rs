// ============================================================
// SPREADSHEET READER
// ============================================================
// Load the first worksheet of a workbook into a typed table

use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};

use crate::domain::error::{AppError, Result};
use crate::domain::table::{Scalar, Table};

/// Largest float magnitude that is still an exact integer in f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Read the first sheet of `path`; the first row is the header
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    fs::metadata(path).map_err(|e| AppError::from_io_at(e, path))?;
    let mut workbook = open_workbook_auto(path).map_err(|e| open_error(e, path))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            AppError::ParseError(format!("No worksheet found in {}", path.display()))
        })?
        .map_err(|e| {
            AppError::ParseError(format!(
                "Failed to read Excel range {}: {}",
                path.display(),
                e
            ))
        })?;

    range_to_table(&range)
}

fn open_error(err: calamine::Error, path: &Path) -> AppError {
    match err {
        calamine::Error::Io(io) => AppError::from_io_at(io, path),
        other => AppError::ParseError(format!(
            "Failed to open Excel file {}: {}",
            path.display(),
            other
        )),
    }
}

/// Convert a worksheet range; header cells become column names
pub fn range_to_table(range: &Range<Data>) -> Result<Table> {
    let mut rows = range.rows();

    let columns = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(idx, cell))
            .collect(),
        None => Vec::new(),
    };

    let mut table = Table::new(columns);
    for row in rows {
        table.push_row(row.iter().map(cell_to_scalar).collect())?;
    }

    Ok(table)
}

fn header_name(idx: usize, cell: &Data) -> String {
    match cell {
        Data::Empty => format!("Unnamed: {}", idx),
        Data::String(s) => s.clone(),
        Data::Float(f) if is_whole(*f) => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER
}

/// Map a cell by its stored type. Spreadsheets store every number as a
/// float, so whole numbers come back as integers.
pub fn cell_to_scalar(cell: &Data) -> Scalar {
    match cell {
        Data::Empty | Data::Error(_) => Scalar::Null,
        Data::String(s) if s.is_empty() => Scalar::Null,
        Data::String(s) => Scalar::text(s.as_str()),
        Data::Int(i) => Scalar::Integer(*i),
        Data::Float(f) if is_whole(*f) => Scalar::Integer(*f as i64),
        Data::Float(f) => Scalar::float(*f),
        Data::Bool(b) => Scalar::Boolean(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map(Scalar::Timestamp)
            .unwrap_or_else(|| Scalar::text(cell.to_string())),
        Data::DurationIso(s) => Scalar::text(s.as_str()),
    }
}
