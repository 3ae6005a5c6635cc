// ============================================================
// SPREADSHEET INFRASTRUCTURE LAYER
// ============================================================
// First-sheet reads via calamine, .xlsx output via rust_xlsxwriter

mod xlsx_reader;
mod xlsx_writer;

pub use xlsx_reader::{cell_to_scalar, read_first_sheet};
pub use xlsx_writer::write_table;

/// Extensions handled as spreadsheets rather than delimited text
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub fn is_spreadsheet(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
