use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::application::{
    ColumnCleaner, ListMode, SqlInsertExporter, TableLoader, TableSplitter,
};
use crate::application::use_cases::{literal_list, text_normalizer};
use crate::domain::error::Result;
use crate::domain::table::SplitReport;
use crate::infrastructure::config::ToolkitConfig;
use crate::infrastructure::csv::CsvWriter;
use crate::infrastructure::{encoding, excel};

#[derive(Parser, Debug)]
#[command(
    name = "tabkit",
    about = "Split CSV/Excel files, clean text columns and generate SQL text"
)]
pub struct Cli {
    /// TOML config file (default: ./tabkit.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the normalized form of a piece of text
    Normalize {
        text: String,
    },

    /// Normalize one column of a CSV or spreadsheet
    Clean {
        input: PathBuf,

        /// Column to normalize
        #[arg(long)]
        column: String,

        /// Output file (default: <stem>_clean<.ext>)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Split a CSV or spreadsheet into N files
    Split {
        input: PathBuf,

        /// Number of output files
        #[arg(long)]
        parts: usize,

        /// CSV text encoding (default from config)
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Generate an INSERT statement from a CSV or spreadsheet
    SqlInsert {
        input: PathBuf,

        /// Target table name
        #[arg(long)]
        table: String,

        /// Output .sql file
        #[arg(long)]
        output: PathBuf,

        /// Normalize this column before rendering (repeatable)
        #[arg(long = "normalize")]
        normalize: Vec<String>,
    },

    /// Turn a line-delimited file into a SQL IN list
    SqlList {
        input: PathBuf,

        /// Parse every line as an integer
        #[arg(long)]
        numeric: bool,
    },
}

/// Result of one subcommand
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandOutput {
    Normalize { text: String },
    Clean { output: PathBuf },
    Split(SplitReport),
    SqlInsert { output: PathBuf },
    SqlList { output: PathBuf, list: String },
}

impl CommandOutput {
    /// Plain-text rendering for the terminal
    pub fn to_human(&self) -> String {
        match self {
            CommandOutput::Normalize { text } => text.clone(),
            CommandOutput::Clean { output } => {
                format!("Cleaned data written to '{}'", output.display())
            }
            CommandOutput::Split(report) => report
                .files
                .iter()
                .zip(&report.row_counts)
                .map(|(file, rows)| format!("{} ({} rows)", file.display(), rows))
                .collect::<Vec<_>>()
                .join("\n"),
            CommandOutput::SqlInsert { output } => format!(
                "The file '{}' has been successfully generated with SQL commands.",
                output.display()
            ),
            CommandOutput::SqlList { output, list } => {
                format!("SQL list saved to {}:\n\n{}", output.display(), list)
            }
        }
    }
}

pub fn execute(command: Command, config: &ToolkitConfig) -> Result<CommandOutput> {
    match command {
        Command::Normalize { text } => Ok(CommandOutput::Normalize {
            text: text_normalizer::normalize_text(&text),
        }),
        Command::Clean {
            input,
            column,
            output,
        } => {
            let output = output.unwrap_or_else(|| ColumnCleaner::default_output(&input));
            let cleaner = ColumnCleaner::new(
                TableLoader::from_config(config)?,
                CsvWriter::new().with_delimiter(config.delimiter_byte()),
                config.text_encoding()?,
            );
            let output = cleaner.clean(&input, &column, &output)?;
            Ok(CommandOutput::Clean { output })
        }
        Command::Split {
            input,
            parts,
            encoding: label,
        } => {
            let splitter = TableSplitter::from_config(config);
            let report = if excel::is_spreadsheet(&input) {
                splitter.split_excel(&input, parts)?
            } else {
                let label = label.as_deref().unwrap_or(&config.encoding);
                splitter.split_csv(&input, parts, encoding::resolve(label)?)?
            };
            Ok(CommandOutput::Split(report))
        }
        Command::SqlInsert {
            input,
            table,
            output,
            normalize,
        } => {
            let output = SqlInsertExporter::new(TableLoader::from_config(config)?)
                .with_normalized_columns(normalize)
                .export(&input, &table, &output)?;
            Ok(CommandOutput::SqlInsert { output })
        }
        Command::SqlList { input, numeric } => {
            let mode = if numeric {
                ListMode::Numeric
            } else {
                ListMode::Text
            };
            let (output, list) = literal_list::write_literal_list(&input, mode)?;
            Ok(CommandOutput::SqlList { output, list })
        }
    }
}
