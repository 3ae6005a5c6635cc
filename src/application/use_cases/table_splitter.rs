// ============================================================
// TABLE SPLITTER USE CASE
// ============================================================
// Partition one CSV or spreadsheet into N near-equal files

use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use tracing::{debug, info};

use crate::domain::error::Result;
use crate::domain::table::{SplitPlan, SplitReport};
use crate::infrastructure::config::ToolkitConfig;
use crate::infrastructure::csv::{CsvParser, CsvWriter};
use crate::infrastructure::excel;
use crate::shared::progress::progress_bar;

const EXCEL_EXTENSION: &str = ".xlsx";

/// Splits tabular files into `<stem>_part_<k>` files next to the source
pub struct TableSplitter {
    delimiter: u8,
    show_progress: bool,
}

impl Default for TableSplitter {
    fn default() -> Self {
        Self {
            delimiter: b',',
            show_progress: false,
        }
    }
}

impl TableSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ToolkitConfig) -> Self {
        Self {
            delimiter: config.delimiter_byte(),
            show_progress: config.progress,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Split a CSV file. Records are copied as read, and every part is written
    /// in the source encoding with the header repeated.
    pub fn split_csv(
        &self,
        path: &Path,
        parts: usize,
        encoding: &'static Encoding,
    ) -> Result<SplitReport> {
        // Validate the part count before touching the file
        SplitPlan::new(0, parts)?;

        let raw = CsvParser::new()
            .with_delimiter(self.delimiter)
            .parse_file_raw(path, encoding)?;
        let plan = SplitPlan::new(raw.len(), parts)?;
        let extension = SplitPlan::source_extension(path);
        let writer = CsvWriter::new().with_delimiter(self.delimiter);

        self.run(&plan, path, &extension, "Splitting CSV", |part_path, range| {
            writer.write_raw_slice(part_path, &raw, range, encoding)
        })
    }

    /// Split the first sheet of a workbook into `.xlsx` parts
    pub fn split_excel(&self, path: &Path, parts: usize) -> Result<SplitReport> {
        SplitPlan::new(0, parts)?;

        let table = excel::read_first_sheet(path)?;
        let plan = SplitPlan::new(table.len(), parts)?;

        self.run(&plan, path, EXCEL_EXTENSION, "Splitting Excel", |part_path, range| {
            excel::write_table(part_path, &table.slice(range.start, range.end))
        })
    }

    fn run<F>(
        &self,
        plan: &SplitPlan,
        source: &Path,
        extension: &str,
        label: &str,
        mut write_part: F,
    ) -> Result<SplitReport>
    where
        F: FnMut(&Path, std::ops::Range<usize>) -> Result<()>,
    {
        info!(
            "Splitting {} ({} rows) into {} files of up to {} rows...",
            source.display(),
            plan.total_rows,
            plan.parts,
            plan.rows_per_file
        );
        let pb = progress_bar(plan.parts as u64, label, self.show_progress);

        let mut files: Vec<PathBuf> = Vec::with_capacity(plan.parts);
        let mut row_counts = Vec::with_capacity(plan.parts);
        for (idx, range) in plan.ranges().enumerate() {
            let part_path = SplitPlan::part_path(source, idx + 1, extension);
            let count = range.len();

            write_part(&part_path, range)?;
            debug!("Wrote {} rows to {}", count, part_path.display());

            files.push(part_path);
            row_counts.push(count);
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("{} completed: {} files written", label, files.len());

        Ok(SplitReport {
            total_rows: plan.total_rows,
            rows_per_file: plan.rows_per_file,
            files,
            row_counts,
        })
    }
}
