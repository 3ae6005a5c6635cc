use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tracing::info;

use super::table_loader::TableLoader;
use super::text_normalizer::normalize_column_in_place;
use crate::domain::error::Result;
use crate::infrastructure::csv::CsvWriter;
use crate::infrastructure::excel;

/// Normalizes one column of a file and writes the whole table back out
pub struct ColumnCleaner {
    loader: TableLoader,
    writer: CsvWriter,
    encoding: &'static Encoding,
}

impl ColumnCleaner {
    pub fn new(loader: TableLoader, writer: CsvWriter, encoding: &'static Encoding) -> Self {
        Self {
            loader,
            writer,
            encoding,
        }
    }

    /// `<dir>/<stem>_clean<.ext>`
    pub fn default_output(input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = input
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        input.with_file_name(format!("{}_clean{}", stem, ext))
    }

    pub fn clean(&self, input: &Path, column: &str, output: &Path) -> Result<PathBuf> {
        let mut table = self.loader.load(input)?;
        normalize_column_in_place(&mut table, column)?;

        if excel::is_spreadsheet(output) {
            excel::write_table(output, &table)?;
        } else {
            self.writer.write_table(output, &table, self.encoding)?;
        }

        info!(
            "Cleaned column '{}' of {} rows into {}",
            column,
            table.len(),
            output.display()
        );
        Ok(output.to_path_buf())
    }
}

impl Default for ColumnCleaner {
    fn default() -> Self {
        Self::new(TableLoader::default(), CsvWriter::default(), encoding_rs::UTF_8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use std::fs;

    #[test]
    fn test_default_output() {
        assert_eq!(
            ColumnCleaner::default_output(Path::new("in/people.csv")),
            PathBuf::from("in/people_clean.csv")
        );
    }

    #[test]
    fn test_clean_csv_column() {
        let dir = std::env::temp_dir().join(format!("tabkit_clean_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("people.csv");
        fs::write(&input, "id,name\n1,\"  Café  Niño! \"\n2,TEA\n").unwrap();

        let output = ColumnCleaner::default_output(&input);
        ColumnCleaner::default().clean(&input, "name", &output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "id,name\n1,cafe nino\n2,tea\n"
        );

        let err = ColumnCleaner::default()
            .clean(&input, "email", &output)
            .unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound(_)));
        fs::remove_dir_all(&dir).ok();
    }
}
