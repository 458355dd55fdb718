//! Command implementations and the pieces they share: source unit loading,
//! config discovery and diagnostic output.

pub mod check;
pub mod desugar;

use anyhow::Context;
use argfields_ast::Module;
use argfields_desugar::config::find_config;
use argfields_desugar::diagnostic::create_files;
use argfields_desugar::{DesugarConfig, DesugarError, DesugarOptions, Diagnostic, JsonDiagnostic};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use termcolor::WriteColor;
use tracing::debug;

use crate::output::write_error_line;

/// What `desugar` prints on success
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitKind {
    /// Rewritten syntax tree as JSON
    Json,
    /// Rewritten tree rendered as source
    Source,
    /// Nothing
    None,
}

/// How diagnostics are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticFormat {
    Pretty,
    Json,
}

/// Input file: a syntax tree plus, optionally, the text it was parsed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Display name used in diagnostics (usually the original file path)
    pub name: String,
    /// Original source text; enables rendering diagnostics against it
    #[serde(default)]
    pub source: Option<String>,
    pub module: Module,
}

impl SourceUnit {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid source unit {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Options from `--config`, else the nearest `argfields.toml`, else defaults
pub fn load_options(explicit: Option<&Path>) -> anyhow::Result<DesugarOptions> {
    let path: Option<PathBuf> = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            find_config(&cwd)
        }
    };

    match path {
        Some(path) => {
            debug!(target: "argfieldc", path = %path.display(), "loading config");
            let config = DesugarConfig::from_file(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Ok(config.desugar)
        }
        None => Ok(DesugarOptions::default()),
    }
}

/// JSON diagnostics, positioned against the source text when present
pub fn json_diagnostics(unit: &SourceUnit, errors: &[DesugarError]) -> Vec<JsonDiagnostic> {
    match &unit.source {
        Some(source) => {
            let files = create_files(&unit.name, source.as_str());
            errors
                .iter()
                .map(|e| JsonDiagnostic::from_diagnostic(&Diagnostic::from_desugar_error(e, 0), &files))
                .collect()
        }
        None => errors
            .iter()
            .map(|e| JsonDiagnostic::from_error(e, &unit.name))
            .collect(),
    }
}

/// Human-readable diagnostics: full codespan rendering with source text,
/// one line per error without it
pub fn render_diagnostics(
    out: &mut dyn WriteColor,
    unit: &SourceUnit,
    errors: &[DesugarError],
) -> anyhow::Result<()> {
    match &unit.source {
        Some(source) => {
            let files = create_files(&unit.name, source.as_str());
            for error in errors {
                Diagnostic::from_desugar_error(error, 0)
                    .emit_to(out, &files)
                    .context("Failed to render diagnostic")?;
            }
        }
        None => {
            for error in errors {
                let span = error.span();
                let location = format!("{}:{}:{}", unit.name, span.line, span.column);
                write_error_line(out, &location, error.code(), &error.to_string());
            }
        }
    }
    Ok(())
}

/// Print diagnostics in the requested format
pub fn report_errors(
    unit: &SourceUnit,
    errors: &[DesugarError],
    format: DiagnosticFormat,
    color: termcolor::ColorChoice,
) -> anyhow::Result<()> {
    match format {
        DiagnosticFormat::Json => {
            let diagnostics = json_diagnostics(unit, errors);
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        }
        DiagnosticFormat::Pretty => {
            let mut out = crate::output::StyledOutput::stderr(color);
            render_diagnostics(out.writer(), unit, errors)?;
            out.plain(&format!(
                "{} error{} in {}",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" },
                unit.name
            ));
            out.newline();
        }
    }
    Ok(())
}
