//! Line-delimited values → parenthesized list for SQL `IN (...)` clauses.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::encoding;

const OUTPUT_SUFFIX: &str = "_sql_list.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// Every line must be an integer; rendered bare
    Numeric,
    /// Every line is wrapped in single quotes verbatim
    Text,
}

/// Render the lines of `content` as `(e1, e2, ...)`.
///
/// Text mode does not escape embedded quotes.
pub fn render_literal_list(content: &str, mode: ListMode) -> Result<String> {
    let elements = content
        .lines()
        .enumerate()
        .map(|(idx, line)| match mode {
            ListMode::Numeric => canonical_integer(line).ok_or_else(|| {
                AppError::ParseError(format!("line {}: '{}' is not an integer", idx + 1, line))
            }),
            ListMode::Text => Ok(format!("'{}'", line)),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("({})", elements.join(", ")))
}

/// Decimal integer of any width in canonical form: surrounding whitespace,
/// a `+` sign and leading zeros dropped, `-0` read as `0`.
fn canonical_integer(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.trim_start_matches('0');
    Some(match (negative, magnitude.is_empty()) {
        (_, true) => "0".to_string(),
        (true, false) => format!("-{}", magnitude),
        (false, false) => magnitude.to_string(),
    })
}

/// `<dir>/<name before its first '.'>_sql_list.txt`
pub fn output_path_for(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default();
    input.with_file_name(format!("{}{}", base, OUTPUT_SUFFIX))
}

/// Convert `input` and write the list next to it. Returns the written path
/// and the rendered list.
pub fn write_literal_list(input: &Path, mode: ListMode) -> Result<(PathBuf, String)> {
    let content = encoding::read_text(input, encoding_rs::UTF_8)?;
    let list = render_literal_list(&content, mode)?;

    let output = output_path_for(input);
    fs::write(&output, &list)
        .map_err(|e| AppError::IoError(format!("{}: {}", output.display(), e)))?;

    info!("SQL list saved to {}", output.display());
    Ok((output, list))
}
