// ============================================================
// CSV WRITER
// ============================================================
// Serialize tables back to CSV bytes in a target encoding

use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use encoding_rs::Encoding;

use crate::domain::error::{AppError, Result};
use crate::domain::table::{RawTable, Table};
use crate::infrastructure::encoding;

pub struct CsvWriter {
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Render a header plus a sequence of records to CSV text
    pub fn render<'a, I, R>(&self, headers: &[String], records: I) -> Result<String>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = &'a str>,
    {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        if !headers.is_empty() {
            writer.write_record(headers)?;
        }
        for record in records {
            writer.write_record(record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::IoError(format!("Failed to flush CSV output: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::EncodingError(format!("CSV output is not UTF-8: {}", e)))
    }

    /// Write `records[range]` of a raw table to `path`
    pub fn write_raw_slice(
        &self,
        path: &Path,
        table: &RawTable,
        range: std::ops::Range<usize>,
        encoding: &'static Encoding,
    ) -> Result<()> {
        let text = self.render(
            &table.headers,
            table.records[range]
                .iter()
                .map(|r| r.iter().map(String::as_str)),
        )?;
        write_encoded(path, &text, encoding)
    }

    /// Write a typed table to `path`, nulls as empty cells
    pub fn write_table(&self, path: &Path, table: &Table, encoding: &'static Encoding) -> Result<()> {
        let cells: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| row.iter().map(|v| v.to_cell_text()).collect())
            .collect();
        let text = self.render(
            table.columns(),
            cells.iter().map(|r| r.iter().map(String::as_str)),
        )?;
        write_encoded(path, &text, encoding)
    }
}

fn write_encoded(path: &Path, text: &str, encoding: &'static Encoding) -> Result<()> {
    let bytes = encoding::encode(text, encoding)?;
    fs::write(path, bytes).map_err(|e| AppError::IoError(format!("{}: {}", path.display(), e)))
}
