// ============================================================
// COLUMN TYPE INFERENCE
// ============================================================
// Decide one scalar type per CSV column, then convert every cell

use crate::domain::error::Result;
use crate::domain::table::{RawTable, Scalar, Table};

/// Cell texts read as missing values, matched exactly
const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnKind {
    /// Narrowest kind that fits every present cell
    fn detect<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> Self {
        let mut present = cells.filter(|c| !is_missing(c)).peekable();
        if present.peek().is_none() {
            return ColumnKind::Text;
        }

        if present.clone().all(|c| c.trim().parse::<i64>().is_ok()) {
            ColumnKind::Integer
        } else if present.clone().all(|c| c.trim().parse::<f64>().is_ok()) {
            ColumnKind::Float
        } else if present.all(|c| parse_bool(c).is_some()) {
            ColumnKind::Boolean
        } else {
            ColumnKind::Text
        }
    }

    fn convert(self, cell: &str) -> Scalar {
        if is_missing(cell) {
            return Scalar::Null;
        }

        let trimmed = cell.trim();
        match self {
            ColumnKind::Integer => trimmed
                .parse::<i64>()
                .map(Scalar::Integer)
                .unwrap_or_else(|_| Scalar::text(cell)),
            ColumnKind::Float => trimmed
                .parse::<f64>()
                .map(Scalar::float)
                .unwrap_or_else(|_| Scalar::text(cell)),
            ColumnKind::Boolean => parse_bool(cell)
                .map(Scalar::Boolean)
                .unwrap_or_else(|| Scalar::text(cell)),
            ColumnKind::Text => Scalar::text(cell),
        }
    }
}

fn is_missing(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Build a typed table from raw records. Null markers become `Null` in
/// every column; with `infer_types` off every other cell stays text.
pub fn infer_columns(raw: RawTable, infer_types: bool) -> Result<Table> {
    let kinds: Vec<ColumnKind> = (0..raw.headers.len())
        .map(|idx| {
            if infer_types {
                ColumnKind::detect(raw.records.iter().map(|r| r[idx].as_str()))
            } else {
                ColumnKind::Text
            }
        })
        .collect();

    let mut table = Table::new(raw.headers);
    for record in &raw.records {
        let row = record
            .iter()
            .zip(&kinds)
            .map(|(cell, kind)| kind.convert(cell))
            .collect();
        table.push_row(row)?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], records: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            records: records
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_infers_per_column() {
        let table = infer_columns(
            raw(
                &["id", "score", "active", "name"],
                &[&["1", "1.5", "True", "Ana"], &["2", "", "false", "42"]],
            ),
            true,
        )
        .unwrap();

        assert_eq!(
            table.rows()[0],
            vec![
                Scalar::Integer(1),
                Scalar::Float(1.5),
                Scalar::Boolean(true),
                Scalar::text("Ana")
            ]
        );
        assert_eq!(
            table.rows()[1],
            vec![
                Scalar::Integer(2),
                Scalar::Null,
                Scalar::Boolean(false),
                Scalar::text("42")
            ]
        );
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let table = infer_columns(raw(&["code"], &[&["1"], &["A2"]]), true).unwrap();
        assert_eq!(table.rows()[0][0], Scalar::text("1"));
    }

    #[test]
    fn test_nan_cell_in_float_column_is_null() {
        let table = infer_columns(raw(&["x"], &[&["NaN"], &["0.5"]]), true).unwrap();
        assert_eq!(table.rows()[0][0], Scalar::Null);
        assert_eq!(table.rows()[1][0], Scalar::Float(0.5));
    }

    #[test]
    fn test_inference_disabled() {
        let table = infer_columns(raw(&["id"], &[&["1"], &[""]]), false).unwrap();
        assert_eq!(table.rows()[0][0], Scalar::text("1"));
        assert_eq!(table.rows()[1][0], Scalar::Null);
    }

    #[test]
    fn test_null_markers_in_text_column() {
        let records: &[&[&str]] = &[&["1", "NULL"], &["2", "N/A"], &["3", "Ana"]];
        let table = infer_columns(raw(&["id", "name"], records), true).unwrap();
        assert_eq!(
            table.rows(),
            &[
                vec![Scalar::Integer(1), Scalar::Null],
                vec![Scalar::Integer(2), Scalar::Null],
                vec![Scalar::Integer(3), Scalar::text("Ana")],
            ]
        );

        let untyped = infer_columns(raw(&["id", "name"], records), false).unwrap();
        assert_eq!(untyped.rows()[0], vec![Scalar::text("1"), Scalar::Null]);
        assert_eq!(untyped.rows()[2][1], Scalar::text("Ana"));
    }

    #[test]
    fn test_null_markers_keep_numeric_kind() {
        let table = infer_columns(raw(&["n"], &[&["4"], &["NA"], &["<NA>"]]), true).unwrap();
        assert_eq!(table.rows()[0][0], Scalar::Integer(4));
        assert_eq!(table.rows()[1][0], Scalar::Null);
        assert_eq!(table.rows()[2][0], Scalar::Null);
    }

    #[test]
    fn test_null_markers_match_exactly() {
        let table = infer_columns(raw(&["v"], &[&[" NA"], &["Nan"], &["none"]]), true).unwrap();
        assert_eq!(table.rows()[0][0], Scalar::text(" NA"));
        assert_eq!(table.rows()[1][0], Scalar::text("Nan"));
        assert_eq!(table.rows()[2][0], Scalar::text("none"));
    }
}
