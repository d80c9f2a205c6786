//! Command-line interface for the screenplay PDF classifier.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "screenplay", version, about = "Classify screenplay PDFs into typed elements")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a screenplay PDF and write the classified script.
    ParsePdf {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Parse a screenplay PDF and write a diagnostic dump of its grouped,
    /// classified elements.
    ParseDebug { input: PathBuf, output: PathBuf },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::ParsePdf { input, output, format } => commands::parse::parse_pdf_command(input, output, format),
        Command::ParseDebug { input, output } => commands::debug::parse_debug_command(input, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
