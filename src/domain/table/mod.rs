// ============================================================
// TABULAR DOMAIN LAYER
// ============================================================
// Core types for datasets read from CSV or spreadsheet files
// No I/O, no external formats

mod dataset;
mod scalar;
mod split_plan;

pub use dataset::{RawTable, Table};
pub use scalar::{format_bool, format_float, Scalar, TIMESTAMP_FORMAT};
pub use split_plan::{SplitPlan, SplitReport};
