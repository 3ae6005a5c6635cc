// ============================================================
// SCALAR VALUES
// ============================================================
// A single typed cell, tagged when the source is read

use chrono::NaiveDateTime;

/// Timestamp layout shared by SQL literals and CSV output
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One atomic cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
}

impl Scalar {
    /// Build a float cell; NaN is a missing value
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            Scalar::Null
        } else {
            Scalar::Float(value)
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Scalar::Text(value.into())
    }

    /// Plain cell rendering used when writing CSV output.
    /// Null renders as an empty cell.
    pub fn to_cell_text(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Text(s) => s.clone(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => format_float(*f),
            Scalar::Boolean(b) => format_bool(*b).to_string(),
            Scalar::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Shortest round-trip decimal form that always shows it is a float
/// (`3.0`, `0.25`, `1e20`).
pub fn format_float(value: f64) -> String {
    if value.is_infinite() {
        if value.is_sign_positive() {
            "inf".to_string()
        } else {
            "-inf".to_string()
        }
    } else {
        format!("{:?}", value)
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(value: NaiveDateTime) -> Self {
        Scalar::Timestamp(value)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Scalar::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_nan_is_null() {
        assert_eq!(Scalar::float(f64::NAN), Scalar::Null);
        assert_eq!(Scalar::from(1.5), Scalar::Float(1.5));
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_cell_text() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        assert_eq!(Scalar::Timestamp(ts).to_cell_text(), "2024-03-09 07:05:00");
        assert_eq!(Scalar::Null.to_cell_text(), "");
        assert_eq!(Scalar::Boolean(false).to_cell_text(), "False");
        assert_eq!(Scalar::from(None::<i64>), Scalar::Null);
    }
}
