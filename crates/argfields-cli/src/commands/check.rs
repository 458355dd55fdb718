//! `argfieldc check`: validate a source unit without printing it.

use std::path::Path;

use argfields_desugar::desugar_module;
use termcolor::ColorChoice;

use super::{load_options, report_errors, DiagnosticFormat, SourceUnit};
use crate::output::StyledOutput;

/// Returns false when the unit had errors.
pub fn execute(
    file: &Path,
    format: DiagnosticFormat,
    config: Option<&Path>,
    color: ColorChoice,
) -> anyhow::Result<bool> {
    let options = load_options(config)?;
    let mut unit = SourceUnit::load(file)?;

    match desugar_module(&mut unit.module, &options) {
        Ok(report) => {
            match format {
                DiagnosticFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                DiagnosticFormat::Pretty => {
                    let mut out = StyledOutput::stdout(color);
                    out.success("ok");
                    out.plain(&format!(
                        " {}: {} argument field(s) in {} class(es)",
                        unit.name,
                        report.field_count(),
                        report.classes.len()
                    ));
                    out.newline();
                }
            }
            Ok(true)
        }
        Err(errors) => {
            report_errors(&unit, &errors, format, color)?;
            Ok(false)
        }
    }
}
