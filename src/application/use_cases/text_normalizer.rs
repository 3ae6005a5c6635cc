//! Text normalization for matching, deduplication and search indexing.
//!
//! The transform trims, collapses whitespace, lowercases, strips combining
//! accents and then drops everything outside a small allowlist:
//! `a-z`, `0-9`, space, `á é í ó ú ü ñ` and `# @ $ .`.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::error::Result;
use crate::domain::table::{Scalar, Table};

/// Punctuation kept by the cleaner
pub const ALLOWED_SPECIAL_CHARS: &str = "#@$.";

/// Unicode whitespace plus the ASCII file, group, record and unit separators
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1C-\x1F]+").unwrap());

static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    // Every allowed special char is literal inside a class
    Regex::new(&format!("[^a-z0-9áéíóúüñ {}]", ALLOWED_SPECIAL_CHARS)).unwrap()
});

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text.trim_matches(is_space), " ")
        .into_owned()
}

/// Canonical cleaned form of `text`. Total and idempotent.
pub fn normalize_text(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let lowered = collapsed.to_lowercase();
    let unaccented: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let filtered = DISALLOWED_CHARS.replace_all(&unaccented, "");

    // Removed characters can leave edge or doubled spaces behind
    collapse_whitespace(&filtered)
}

/// Normalize text scalars; every other variant passes through unchanged
pub fn normalize_scalar(value: &Scalar) -> Scalar {
    match value {
        Scalar::Text(text) => Scalar::Text(normalize_text(text)),
        other => other.clone(),
    }
}

/// Normalize one column, producing one value per row in row order
pub fn normalize_column(table: &Table, column: &str) -> Result<Vec<Scalar>> {
    Ok(table.column_values(column)?.map(normalize_scalar).collect())
}

/// Normalize one column of `table` in place
pub fn normalize_column_in_place(table: &mut Table, column: &str) -> Result<()> {
    let cleaned = normalize_column(table, column)?;
    table.replace_column(column, cleaned)
}
