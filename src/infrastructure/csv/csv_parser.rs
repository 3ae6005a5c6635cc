// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV files with a declared encoding into raw or typed tables

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::Encoding;

use super::column_inference::infer_columns;
use crate::domain::error::{AppError, Result};
use crate::domain::table::{RawTable, Table};
use crate::infrastructure::encoding;

/// CSV parser with configurable delimiter
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Infer integer/float/boolean columns when building typed tables
    infer_types: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_types: true,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether typed reads infer column types
    pub fn with_type_inference(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }

    /// Read and decode a CSV file, keeping every cell as its source string
    pub fn parse_file_raw(&self, path: &Path, encoding: &'static Encoding) -> Result<RawTable> {
        let content = encoding::read_text(path, encoding)?;
        self.parse_content_raw(&content)
            .map_err(|e| with_path_context(e, path))
    }

    /// Read and decode a CSV file into a typed table
    pub fn parse_file(&self, path: &Path, encoding: &'static Encoding) -> Result<Table> {
        let raw = self.parse_file_raw(path, encoding)?;
        infer_columns(raw, self.infer_types)
    }

    /// Parse CSV content from string into a typed table
    pub fn parse_content(&self, content: &str) -> Result<Table> {
        let raw = self.parse_content_raw(content)?;
        infer_columns(raw, self.infer_types)
    }

    /// Parse CSV content from string, keeping raw strings
    pub fn parse_content_raw(&self, content: &str) -> Result<RawTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            records.push(Self::parse_row(index, &headers, &record)?);
        }

        Ok(RawTable {
            headers: headers.iter().map(str::to_string).collect(),
            records,
        })
    }

    /// Pad a short record with empty cells; reject records wider than the header
    fn parse_row(
        index: usize,
        headers: &StringRecord,
        record: &StringRecord,
    ) -> Result<Vec<String>> {
        if record.len() > headers.len() {
            return Err(AppError::ParseError(format!(
                "CSV row {} has {} fields, expected at most {}",
                index + 1,
                record.len(),
                headers.len()
            )));
        }

        Ok((0..headers.len())
            .map(|idx| record.get(idx).unwrap_or("").to_string())
            .collect())
    }
}

fn with_path_context(err: AppError, path: &Path) -> AppError {
    match err {
        AppError::ParseError(msg) => AppError::ParseError(format!("{}: {}", path.display(), msg)),
        other => other,
    }
}
