//! RankCheck CLI
//!
//! Offline tools for normalizing graph files and verifying PageRank results.

use clap::Parser;
use rankcheck_core::error::exit_codes;
use rankcheck_core::RankCheckError;
use std::process::ExitCode;

mod app;
mod commands;

use app::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; --verbose raises the default level to INFO
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let result = match cli.command {
        Commands::Normalize(args) => commands::normalize::run(args),
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Summarize(args) => commands::summarize::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<RankCheckError>()
                .map(RankCheckError::exit_code)
                .unwrap_or(exit_codes::GENERAL_ERROR);
            ExitCode::from(code as u8)
        }
    }
}
