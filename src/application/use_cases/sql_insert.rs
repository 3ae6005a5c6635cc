//! Render a dataset as a single literal `INSERT INTO ... VALUES` statement.
//!
//! Values are rendered by their scalar type: text and timestamps are
//! single-quoted with `'` doubled, numbers are bare, nulls are `NULL`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::table_loader::TableLoader;
use super::text_normalizer::normalize_column_in_place;
use crate::domain::error::{AppError, Result};
use crate::domain::table::{format_bool, format_float, Scalar, Table, TIMESTAMP_FORMAT};

/// Quote `text` as a SQL string literal
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// SQL literal for one value
pub fn render_value(value: &Scalar) -> String {
    match value {
        Scalar::Text(text) => quote_literal(text),
        Scalar::Null => "NULL".to_string(),
        Scalar::Timestamp(ts) => quote_literal(&ts.format(TIMESTAMP_FORMAT).to_string()),
        Scalar::Integer(i) => i.to_string(),
        Scalar::Float(f) => format_float(*f),
        Scalar::Boolean(b) => quote_literal(format_bool(*b)),
    }
}

/// `(v1, v2, ...)` for one row
pub fn render_row(row: &[Scalar]) -> String {
    let values: Vec<String> = row.iter().map(render_value).collect();
    format!("({})", values.join(", "))
}

/// Full statement text, header line first, terminated by `;`
pub fn render_insert(table: &Table, table_name: &str) -> Result<String> {
    if table_name.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Table name must not be empty".to_string(),
        ));
    }

    let header = format!(
        "INSERT INTO {} ({}) VALUES\n",
        table_name,
        table.columns().join(", ")
    );
    let rows: Vec<String> = table.rows().iter().map(|row| render_row(row)).collect();

    Ok(format!("{}{};", header, rows.join(",\n")))
}

/// Render and write the statement to `output_path` in one write
pub fn write_insert(table: &Table, table_name: &str, output_path: &Path) -> Result<PathBuf> {
    let sql = render_insert(table, table_name)?;

    fs::write(output_path, sql)
        .map_err(|e| AppError::IoError(format!("{}: {}", output_path.display(), e)))?;

    info!(
        "The file '{}' has been successfully generated with SQL commands ({} rows)",
        output_path.display(),
        table.len()
    );
    Ok(output_path.to_path_buf())
}

/// Source file → INSERT statement file, with optional per-column cleaning
pub struct SqlInsertExporter {
    loader: TableLoader,
    normalize_columns: Vec<String>,
}

impl SqlInsertExporter {
    pub fn new(loader: TableLoader) -> Self {
        Self {
            loader,
            normalize_columns: Vec::new(),
        }
    }

    /// Pipe these columns through the text normalizer before rendering
    pub fn with_normalized_columns(mut self, columns: Vec<String>) -> Self {
        self.normalize_columns = columns;
        self
    }

    pub fn export(&self, input: &Path, table_name: &str, output: &Path) -> Result<PathBuf> {
        let mut table = self.loader.load(input)?;
        for column in &self.normalize_columns {
            normalize_column_in_place(&mut table, column)?;
        }
        write_insert(&table, table_name, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn users() -> Table {
        let mut table = Table::new(vec![
            "id".to_string(),
            "name".to_string(),
            "note".to_string(),
        ]);
        table
            .push_row(vec![
                Scalar::Integer(1),
                Scalar::text("O'Brien"),
                Scalar::Null,
            ])
            .unwrap();
        table
    }

    #[test]
    fn test_single_row_statement() {
        let sql = render_insert(&users(), "users").unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (id, name, note) VALUES\n(1, 'O''Brien', NULL);"
        );
    }

    #[test]
    fn test_rows_joined_with_comma_newline() {
        let mut table = users();
        table
            .push_row(vec![Scalar::Integer(2), Scalar::text("Ana"), Scalar::text("x")])
            .unwrap();
        let sql = render_insert(&table, "users").unwrap();
        assert!(sql.ends_with("(1, 'O''Brien', NULL),\n(2, 'Ana', 'x');"));
    }

    #[test]
    fn test_value_rendering_by_type() {
        let ts = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 1)
            .unwrap();
        assert_eq!(render_value(&Scalar::Timestamp(ts)), "'2023-12-31 23:59:01'");
        assert_eq!(render_value(&Scalar::Float(2.5)), "2.5");
        assert_eq!(render_value(&Scalar::Float(4.0)), "4.0");
        assert_eq!(render_value(&Scalar::Integer(-3)), "-3");
        assert_eq!(render_value(&Scalar::Boolean(true)), "'True'");
        assert_eq!(render_value(&Scalar::text("it's")), "'it''s'");
    }

    #[test]
    fn test_empty_table_renders_header_and_terminator() {
        let table = Table::new(vec!["a".to_string()]);
        assert_eq!(
            render_insert(&table, "t").unwrap(),
            "INSERT INTO t (a) VALUES\n;"
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let table = users();
        assert_eq!(
            render_insert(&table, "users").unwrap(),
            render_insert(&table, "users").unwrap()
        );
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_insert(&users(), "users", Path::new("/nonexistent/dir/out.sql"))
            .unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn test_export_with_normalized_column() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("tabkit_users_{}.csv", uuid::Uuid::new_v4()));
        let output = dir.join(format!("tabkit_users_{}.sql", uuid::Uuid::new_v4()));
        fs::write(&input, "id,name,note\n1,O'Brien,\n").unwrap();

        let written = SqlInsertExporter::new(TableLoader::default())
            .with_normalized_columns(vec!["name".to_string()])
            .export(&input, "users", &output)
            .unwrap();

        assert_eq!(written, output);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "INSERT INTO users (id, name, note) VALUES\n(1, 'obrien', NULL);"
        );
        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn test_export_null_markers_in_text_column() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("tabkit_names_{}.csv", uuid::Uuid::new_v4()));
        let output = dir.join(format!("tabkit_names_{}.sql", uuid::Uuid::new_v4()));
        fs::write(&input, "id,name\n1,NULL\n2,N/A\n3,Ana\n").unwrap();

        SqlInsertExporter::new(TableLoader::default())
            .export(&input, "people", &output)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "INSERT INTO people (id, name) VALUES\n(1, NULL),\n(2, NULL),\n(3, 'Ana');"
        );
        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn test_export_unknown_normalized_column() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("tabkit_users_{}.csv", uuid::Uuid::new_v4()));
        fs::write(&input, "id\n1\n").unwrap();

        let err = SqlInsertExporter::new(TableLoader::default())
            .with_normalized_columns(vec!["name".to_string()])
            .export(&input, "users", &dir.join("unused.sql"))
            .unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound(_)));
        fs::remove_file(&input).ok();
    }
}
