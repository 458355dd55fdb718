//! `argfieldc desugar`: rewrite a source unit and print the result.

use std::path::Path;

use argfields_ast::printer::print_module;
use argfields_desugar::desugar_module;
use termcolor::ColorChoice;
use tracing::info;

use super::{load_options, report_errors, DiagnosticFormat, EmitKind, SourceUnit};

/// Returns false when the unit had errors.
pub fn execute(
    file: &Path,
    emit: EmitKind,
    format: DiagnosticFormat,
    config: Option<&Path>,
    color: ColorChoice,
) -> anyhow::Result<bool> {
    let options = load_options(config)?;
    let mut unit = SourceUnit::load(file)?;
    info!(target: "argfieldc", unit = %unit.name, "desugaring");

    match desugar_module(&mut unit.module, &options) {
        Ok(report) => {
            info!(
                target: "argfieldc",
                classes = report.classes.len(),
                fields = report.field_count(),
                "desugared"
            );
            match emit {
                EmitKind::Json => println!("{}", serde_json::to_string_pretty(&unit.module)?),
                EmitKind::Source => print!("{}", print_module(&unit.module)),
                EmitKind::None => {}
            }
            Ok(true)
        }
        Err(errors) => {
            report_errors(&unit, &errors, format, color)?;
            Ok(false)
        }
    }
}
