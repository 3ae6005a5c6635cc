// ============================================================
// SPLIT PLAN
// ============================================================
// Fixed-block partitioning of a row sequence into N parts

use serde::Serialize;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};

/// Row ranges for splitting `total_rows` rows into `parts` files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    pub total_rows: usize,
    pub parts: usize,
    pub rows_per_file: usize,
}

impl SplitPlan {
    /// `rows_per_file = ceil(total_rows / parts)`
    pub fn new(total_rows: usize, parts: usize) -> Result<Self> {
        if parts == 0 {
            return Err(AppError::ValidationError(
                "Number of parts must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            total_rows,
            parts,
            rows_per_file: total_rows.div_ceil(parts),
        })
    }

    /// Row range of part `index` (0-based). Parts past the end of the data
    /// are empty.
    pub fn range(&self, index: usize) -> Range<usize> {
        let start = (index * self.rows_per_file).min(self.total_rows);
        let end = (start + self.rows_per_file).min(self.total_rows);
        start..end
    }

    /// All part ranges, in part order
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.parts).map(|i| self.range(i))
    }

    /// `<dir>/<stem>_part_<k><ext>` with `k` 1-based.
    /// `extension` includes its leading dot, or is empty.
    pub fn part_path(source: &Path, number: usize, extension: &str) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        source.with_file_name(format!("{}_part_{}{}", stem, number, extension))
    }

    /// Extension of `source` with its leading dot, or empty
    pub fn source_extension(source: &Path) -> String {
        source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// Outcome of a split operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub total_rows: usize,
    pub rows_per_file: usize,
    pub files: Vec<PathBuf>,
    pub row_counts: Vec<usize>,
}
