//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use ropf::output::OutputMode;

/// ropf - Parser and validator for Rich Opinion Poll Files
#[derive(Parser, Debug)]
#[command(
    name = "ropf",
    version,
    about = "Parser and validator for Rich Opinion Poll Files",
    long_about = "Parse Rich Opinion Poll Files and report problems line by line.\n\n\
                  Every malformed or incomplete line becomes a warning;\n\
                  the rest of the file is still parsed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Parser configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a poll file and report its warnings
    Check {
        /// The poll file
        file: PathBuf,
    },

    /// Show statistics of a poll file
    Summary {
        /// The poll file
        file: PathBuf,
    },
}

/// Run the CLI, returning whether the command passed
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ropf::ParserConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Check { file } => commands::check(&file, &config, output_mode),
        Command::Summary { file } => commands::summary(&file, &config, output_mode),
    }
}
