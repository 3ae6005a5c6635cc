pub mod use_cases;

pub use use_cases::column_cleaner::ColumnCleaner;
pub use use_cases::literal_list::ListMode;
pub use use_cases::sql_insert::SqlInsertExporter;
pub use use_cases::table_loader::TableLoader;
pub use use_cases::table_splitter::TableSplitter;
