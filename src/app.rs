use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::ToolkitConfig;
use crate::interfaces::cli::{execute, Cli};

/// Exit status for any failed operation
const EXIT_FAILURE: u8 = 2;

fn init_tracing(config: &ToolkitConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match ToolkitConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    init_tracing(&config);

    let output = match execute(cli.command, &config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                return ExitCode::from(EXIT_FAILURE);
            }
        }
    } else {
        println!("{}", output.to_human());
    }

    ExitCode::SUCCESS
}
