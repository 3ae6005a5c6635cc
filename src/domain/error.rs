use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    FileNotFound(String),
    EncodingError(String),
    ColumnNotFound(String),
    ParseError(String),
    ValidationError(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileNotFound(path) => write!(f, "File not found: {}", path),
            AppError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
            AppError::ColumnNotFound(column) => {
                write!(f, "The column '{}' does not exist in the dataset", column)
            }
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => AppError::IoError(err.to_string()),
            _ => AppError::ParseError(err.to_string()),
        }
    }
}

impl From<calamine::Error> for AppError {
    fn from(err: calamine::Error) -> Self {
        AppError::ParseError(format!("Failed to read workbook: {}", err))
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::IoError(format!("Failed to write workbook: {}", err))
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ValidationError(format!("Invalid configuration: {}", err))
    }
}

impl AppError {
    /// Map an I/O error raised while opening `path`, keeping "not found"
    /// distinct from other failures.
    pub fn from_io_at(err: std::io::Error, path: &std::path::Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AppError::FileNotFound(path.display().to_string())
        } else {
            AppError::IoError(format!("{}: {}", path.display(), err))
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let mapped = AppError::from_io_at(err, Path::new("missing.csv"));
        assert!(matches!(mapped, AppError::FileNotFound(ref p) if p == "missing.csv"));
    }

    #[test]
    fn test_column_not_found_message_names_column() {
        let err = AppError::ColumnNotFound("email".to_string());
        assert_eq!(
            err.to_string(),
            "The column 'email' does not exist in the dataset"
        );
    }
}
