use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use simplelog::LevelFilter;

mod drawings;
mod extract;
mod liftreport;

/// Extracts fields and tables from PDF documents with a fixed page layout.
#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    Extract(extract::Command),
    Report(liftreport::Command),
    Drawings(drawings::Command),
}

/// Arguments shared by the commands that run a structural configuration.
#[derive(Args, Debug)]
struct ExtractionArgs {
    /// Path to the input PDF.
    input_pdf: PathBuf,

    /// Path to the structural configuration YAML file.
    #[arg(long)]
    config: PathBuf,

    /// Path to write the JSON result to. The result is written to stdout if not given.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to save a copy of the input PDF to, with every region that was read overlaid.
    #[arg(long)]
    annotated: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    simplelog::SimpleLogger::init(cli.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    use Command::*;
    match &cli.command {
        Extract(cmd) => extract::run(cmd),
        Report(cmd) => liftreport::run(cmd),
        Drawings(cmd) => drawings::run(cmd),
    }
}
