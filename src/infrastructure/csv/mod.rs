// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing, column typing, and encoded output

mod column_inference;
mod csv_parser;
mod csv_writer;

pub use column_inference::infer_columns;
pub use csv_parser::CsvParser;
pub use csv_writer::CsvWriter;
