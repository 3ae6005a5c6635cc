//! Small utilities for tabular and text data munging: text normalization,
//! CSV/Excel splitting, and SQL `INSERT` / `IN (...)` text generation.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

mod app;

pub use app::run;
pub use application::use_cases::literal_list::{render_literal_list, write_literal_list};
pub use application::use_cases::sql_insert::{render_insert, write_insert};
pub use application::use_cases::text_normalizer::{
    normalize_column, normalize_scalar, normalize_text,
};
pub use application::{ListMode, TableSplitter};
pub use domain::error::{AppError, Result};
pub use domain::table::{Scalar, SplitReport, Table};
