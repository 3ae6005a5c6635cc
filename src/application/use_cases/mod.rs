pub mod column_cleaner;
pub mod literal_list;
pub mod sql_insert;
pub mod table_loader;
pub mod table_splitter;
pub mod text_normalizer;
