//! argfieldc: command-line driver for argument-field desugaring
//!
//! Reads a JSON source unit (a syntax tree produced by a host parser, plus
//! the source text when available), runs the pass and prints either the
//! rewritten tree or the diagnostics.

mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{DiagnosticFormat, EmitKind};
use logging::LogFormat;

#[derive(Parser)]
#[command(name = "argfieldc")]
#[command(about = "Desugar constructor argument fields into class fields", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every pass event (overrides RUST_LOG)
    #[arg(long, global = true)]
    trace: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Color output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Desugar a source unit and print the result
    Desugar {
        /// Source unit (JSON)
        file: PathBuf,
        /// What to print on success
        #[arg(long, value_enum, default_value_t = EmitKind::Source)]
        emit: EmitKind,
        /// Diagnostic output format
        #[arg(long, value_enum, default_value_t = DiagnosticFormat::Pretty)]
        format: DiagnosticFormat,
        /// Config file (defaults to the nearest argfields.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a source unit without printing it
    Check {
        /// Source unit (JSON)
        file: PathBuf,
        /// Diagnostic output format
        #[arg(long, value_enum, default_value_t = DiagnosticFormat::Pretty)]
        format: DiagnosticFormat,
        /// Config file (defaults to the nearest argfields.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format, cli.trace);
    let color = output::resolve_color_choice(cli.color.as_deref());

    let ok = match cli.command {
        Commands::Desugar {
            file,
            emit,
            format,
            config,
        } => commands::desugar::execute(&file, emit, format, config.as_deref(), color)?,
        Commands::Check {
            file,
            format,
            config,
        } => commands::check::execute(&file, format, config.as_deref(), color)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
