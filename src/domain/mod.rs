pub mod error;

// Tabular datasets and scalar values
pub mod table;
