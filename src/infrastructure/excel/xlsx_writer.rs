// ============================================================
// SPREADSHEET WRITER
// ============================================================
// Write a typed table to a single-sheet .xlsx workbook

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};

use crate::domain::error::{AppError, Result};
use crate::domain::table::{format_float, Scalar, Table};

const TIMESTAMP_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Largest integer magnitude a numeric cell (f64) holds exactly
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Write `table` with a header row; null cells are left blank
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let timestamp_format = Format::new().set_num_format(TIMESTAMP_NUM_FORMAT);

    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, col_num(col)?, name)?;
    }

    for (idx, row) in table.rows().iter().enumerate() {
        let row_num = row_num(idx + 1)?;
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, row_num, col_num(col)?, value, &timestamp_format)?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &Scalar,
    timestamp_format: &Format,
) -> Result<()> {
    match value {
        Scalar::Null => {}
        Scalar::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        Scalar::Integer(i) if i.unsigned_abs() <= MAX_EXACT_INTEGER => {
            worksheet.write_number(row, col, *i as f64)?;
        }
        // Wider integers keep their digits as a text cell
        Scalar::Integer(i) => {
            worksheet.write_string(row, col, i.to_string())?;
        }
        Scalar::Float(f) if f.is_finite() => {
            worksheet.write_number(row, col, *f)?;
        }
        Scalar::Float(f) => {
            worksheet.write_string(row, col, format_float(*f))?;
        }
        Scalar::Boolean(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Scalar::Timestamp(ts) => {
            worksheet.write_datetime_with_format(row, col, ts, timestamp_format)?;
        }
    }
    Ok(())
}

fn row_num(idx: usize) -> Result<RowNum> {
    RowNum::try_from(idx)
        .map_err(|_| AppError::ValidationError(format!("Row {} exceeds the sheet size", idx)))
}

fn col_num(idx: usize) -> Result<ColNum> {
    ColNum::try_from(idx)
        .map_err(|_| AppError::ValidationError(format!("Column {} exceeds the sheet size", idx)))
}
