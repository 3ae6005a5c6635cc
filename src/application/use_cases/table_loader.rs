// ============================================================
// TABLE LOADER
// ============================================================
// Pick the reader for a source file by its extension

use std::path::Path;

use encoding_rs::Encoding;
use tracing::debug;

use crate::domain::error::Result;
use crate::domain::table::Table;
use crate::infrastructure::config::ToolkitConfig;
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::excel;

/// Reads CSV or spreadsheet files into typed tables
pub struct TableLoader {
    parser: CsvParser,
    encoding: &'static Encoding,
}

impl TableLoader {
    pub fn new(parser: CsvParser, encoding: &'static Encoding) -> Self {
        Self { parser, encoding }
    }

    /// Loader using the configured delimiter, encoding and inference setting
    pub fn from_config(config: &ToolkitConfig) -> Result<Self> {
        let parser = CsvParser::new()
            .with_delimiter(config.delimiter_byte())
            .with_type_inference(config.infer_types);
        Ok(Self::new(parser, config.text_encoding()?))
    }

    pub fn load(&self, path: &Path) -> Result<Table> {
        let table = if excel::is_spreadsheet(path) {
            excel::read_first_sheet(path)?
        } else {
            self.parser.parse_file(path, self.encoding)?
        };

        debug!(
            "Loaded {} rows x {} columns from {}",
            table.len(),
            table.columns().len(),
            path.display()
        );
        Ok(table)
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(CsvParser::default(), encoding_rs::UTF_8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use crate::domain::table::Scalar;

    #[test]
    fn test_loads_csv_with_config() {
        let path = std::env::temp_dir().join(format!("tabkit_loader_{}.csv", uuid::Uuid::new_v4()));
        std::fs::write(&path, "a;b\n1;x\n").unwrap();

        let config = ToolkitConfig {
            delimiter: ';',
            ..Default::default()
        };
        let table = TableLoader::from_config(&config).unwrap().load(&path).unwrap();
        assert_eq!(table.rows()[0], vec![Scalar::Integer(1), Scalar::text("x")]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_csv_is_file_not_found() {
        let err = TableLoader::default()
            .load(Path::new("/nonexistent/tabkit/input.csv"))
            .unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
    }
}
