// ============================================================
// TABLE TYPES
// ============================================================
// In-memory datasets with a shared, stable column order

use super::Scalar;
use crate::domain::error::{AppError, Result};

/// Typed dataset: every row holds one scalar per column, in column order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl Table {
    /// Create an empty table with the given columns
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with nulls; rows wider than the
    /// header are rejected.
    pub fn push_row(&mut self, mut row: Vec<Scalar>) -> Result<()> {
        if row.len() > self.columns.len() {
            return Err(AppError::ValidationError(format!(
                "Row {} has {} values but the table has {} columns",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        row.resize(self.columns.len(), Scalar::Null);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AppError::ColumnNotFound(name.to_string()))
    }

    /// Iterate over the values of one column, in row order
    pub fn column_values(&self, name: &str) -> Result<impl Iterator<Item = &Scalar> + '_> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Overwrite one column with `values`, one per row
    pub fn replace_column(&mut self, name: &str, values: Vec<Scalar>) -> Result<()> {
        let idx = self.column_index(name)?;
        if values.len() != self.rows.len() {
            return Err(AppError::ValidationError(format!(
                "Column '{}' needs {} values, got {}",
                name,
                self.rows.len(),
                values.len()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = value;
        }
        Ok(())
    }

    /// Copy of the rows in `start..end` with the same columns
    pub fn slice(&self, start: usize, end: usize) -> Table {
        let end = end.min(self.rows.len());
        let start = start.min(end);
        Table {
            columns: self.columns.clone(),
            rows: self.rows[start..end].to_vec(),
        }
    }
}

/// Untyped dataset kept as the exact strings read from the source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        let mut table = Table::new(vec!["id".to_string(), "name".to_string()]);
        table
            .push_row(vec![Scalar::Integer(1), Scalar::text("Ana")])
            .unwrap();
        table.push_row(vec![Scalar::Integer(2)]).unwrap();
        table
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = people();
        assert_eq!(table.rows()[1], vec![Scalar::Integer(2), Scalar::Null]);
    }

    #[test]
    fn test_wide_rows_are_rejected() {
        let mut table = people();
        let err = table
            .push_row(vec![Scalar::Null, Scalar::Null, Scalar::Null])
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_replace_column() {
        let mut table = people();
        table
            .replace_column("name", vec![Scalar::text("a"), Scalar::text("b")])
            .unwrap();
        let names: Vec<_> = table.column_values("name").unwrap().cloned().collect();
        assert_eq!(names, vec![Scalar::text("a"), Scalar::text("b")]);
    }

    #[test]
    fn test_missing_column() {
        let table = people();
        assert!(matches!(
            table.column_index("email"),
            Err(AppError::ColumnNotFound(ref c)) if c == "email"
        ));
    }

    #[test]
    fn test_slice_clamps_bounds() {
        let table = people();
        assert_eq!(table.slice(1, 10).len(), 1);
        assert_eq!(table.slice(5, 10).len(), 0);
    }
}
