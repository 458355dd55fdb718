//! Diagnostic rendering for desugaring errors
//!
//! Wraps `codespan-reporting` so errors can be shown against the source text
//! with labels and help notes, or serialized to JSON for editors.

use argfields_ast::Span;
use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label, LabelStyle, Severity};
use codespan_reporting::files::{Files, SimpleFiles};
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DesugarError;

/// Error code for a diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        self.0
    }
}

/// A diagnostic message with source code context
pub struct Diagnostic {
    inner: CsDiagnostic<usize>,
    code: Option<ErrorCode>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            inner: CsDiagnostic::new(Severity::Error).with_message(message),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.inner = self.inner.with_code(code.0);
        self.code = Some(code);
        self
    }

    /// Add a primary label (main error location)
    pub fn with_primary_label(mut self, file_id: usize, span: Span, message: impl Into<String>) -> Self {
        self.inner
            .labels
            .push(Label::primary(file_id, span.start..span.end).with_message(message));
        self
    }

    /// Add a secondary label (related location)
    pub fn with_secondary_label(mut self, file_id: usize, span: Span, message: impl Into<String>) -> Self {
        self.inner
            .labels
            .push(Label::secondary(file_id, span.start..span.end).with_message(message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.inner.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.inner.notes.push(format!("help: {}", help.into()));
        self
    }

    /// Create diagnostic from a DesugarError
    pub fn from_desugar_error(error: &DesugarError, file_id: usize) -> Self {
        use DesugarError::*;

        let diag = Diagnostic::error(error.to_string()).with_code(error_code(error));
        match error {
            InvalidFieldContext { context, span, .. } => diag
                .with_primary_label(file_id, *span, format!("argument field in {}", context))
                .with_help("argument fields are only allowed on constructors of concrete top-level classes; declare the field in the class body instead"),

            StaticArgumentField { span, .. } => diag
                .with_primary_label(file_id, *span, "'static' is not allowed here")
                .with_help("declare a static field in the class body instead"),

            DuplicateField { name, class, original, duplicate } => {
                let diag = diag.with_primary_label(file_id, *duplicate, "duplicate field");
                // Fields of host-registered classes have no location in this file
                if original.is_empty() {
                    diag.with_note(format!("'{}' is declared in class '{}'", name, class))
                } else {
                    diag.with_secondary_label(file_id, *original, format!("'{}' first declared here", name))
                }
            }

            ConflictingModifiers { second, .. } => diag
                .with_primary_label(file_id, error.span(), "conflicting modifier")
                .with_help(format!("remove '{}'", second)),

            ModifierWithoutStorage { name, modifier, span } => diag
                .with_primary_label(file_id, *span, "modifier on a plain parameter")
                .with_help(format!(
                    "add 'var' or 'final' to make '{}' a field, or remove '{}'",
                    name, modifier
                )),

            CyclicInheritance { span, .. } => diag
                .with_primary_label(file_id, *span, "inheritance cycle")
                .with_note("classes whose superclass chain loops are not desugared"),

            DuplicateConstructor { original, duplicate, .. } => diag
                .with_primary_label(file_id, *duplicate, "second constructor")
                .with_secondary_label(file_id, *original, "first constructor here"),

            DuplicateClass { original, duplicate, .. } => diag
                .with_primary_label(file_id, *duplicate, "class name already used")
                .with_secondary_label(file_id, *original, "first declared here")
                .with_help("rename one of the classes; only the first declaration is desugared"),
        }
    }

    /// Emit the diagnostic to stderr with colors
    pub fn emit(&self, files: &SimpleFiles<String, String>) -> Result<(), codespan_reporting::files::Error> {
        let mut writer = StandardStream::stderr(ColorChoice::Auto);
        self.emit_to(&mut writer, files)
    }

    /// Emit the diagnostic to any color-capable writer
    pub fn emit_to(
        &self,
        writer: &mut dyn WriteColor,
        files: &SimpleFiles<String, String>,
    ) -> Result<(), codespan_reporting::files::Error> {
        let config = term::Config::default();
        term::emit(writer, &config, files, &self.inner)
    }

    /// Get the underlying codespan diagnostic
    pub fn inner(&self) -> &CsDiagnostic<usize> {
        &self.inner
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    /// Convert to JSON representation for IDE integration
    pub fn to_json(&self, files: &SimpleFiles<String, String>) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonDiagnostic::from_diagnostic(self, files))
    }
}

/// JSON representation of a diagnostic for IDE integration
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub code: Option<String>,
    pub severity: String,
    pub message: String,
    pub labels: Vec<JsonLabel>,
    /// Additional notes and help
    pub notes: Vec<String>,
}

/// JSON representation of a diagnostic label
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLabel {
    pub file: String,
    /// Start line (1-indexed)
    pub start_line: usize,
    /// Start column (1-indexed)
    pub start_column: usize,
    /// End line (1-indexed)
    pub end_line: usize,
    /// End column (1-indexed)
    pub end_column: usize,
    pub message: Option<String>,
    /// "primary" or "secondary"
    pub style: String,
}

impl JsonDiagnostic {
    /// Convert a Diagnostic to JSON representation
    pub fn from_diagnostic(diag: &Diagnostic, files: &SimpleFiles<String, String>) -> Self {
        let labels = diag
            .inner
            .labels
            .iter()
            .filter_map(|label| {
                let file = files.get(label.file_id).ok()?;
                let start = file.location((), label.range.start).ok()?;
                let end = file.location((), label.range.end).ok()?;

                Some(JsonLabel {
                    file: file.name().to_string(),
                    start_line: start.line_number,
                    start_column: start.column_number,
                    end_line: end.line_number,
                    end_column: end.column_number,
                    message: Some(label.message.clone()),
                    style: label_style(label.style).to_string(),
                })
            })
            .collect();

        JsonDiagnostic {
            code: diag.code.as_ref().map(|c| c.0.to_string()),
            severity: "error".to_string(),
            message: diag.inner.message.clone(),
            labels,
            notes: diag.inner.notes.clone(),
        }
    }

    /// Build a JSON diagnostic straight from an error when no source text is
    /// available. Positions come from the span's recorded line and column.
    pub fn from_error(error: &DesugarError, file: &str) -> Self {
        let diag = Diagnostic::from_desugar_error(error, 0);
        let span = error.span();
        let labels = diag
            .inner
            .labels
            .iter()
            .filter(|label| label.style == LabelStyle::Primary)
            .map(|label| JsonLabel {
                file: file.to_string(),
                start_line: span.line as usize,
                start_column: span.column as usize,
                end_line: span.line as usize,
                end_column: span.column as usize + span.len(),
                message: Some(label.message.clone()),
                style: label_style(label.style).to_string(),
            })
            .collect();

        JsonDiagnostic {
            code: Some(error.code().to_string()),
            severity: "error".to_string(),
            message: diag.inner.message.clone(),
            labels,
            notes: diag.inner.notes.clone(),
        }
    }
}

fn label_style(style: LabelStyle) -> &'static str {
    match style {
        LabelStyle::Primary => "primary",
        LabelStyle::Secondary => "secondary",
    }
}

/// Get error code for a DesugarError
pub fn error_code(error: &DesugarError) -> ErrorCode {
    ErrorCode(error.code())
}

/// Helper to create a SimpleFiles instance from source code
pub fn create_files(path: impl Into<PathBuf>, source: impl Into<String>) -> SimpleFiles<String, String> {
    let mut files = SimpleFiles::new();
    files.add(path.into().display().to_string(), source.into());
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldContext;
    use codespan_reporting::term::termcolor::NoColor;

    const SOURCE: &str = "class Foo {\n    var foo:Int;\n}\nclass FooBar extends Foo {\n    new(var foo:Int) {}\n}\n";

    fn duplicate_foo() -> DesugarError {
        DesugarError::DuplicateField {
            name: "foo".to_string(),
            class: "Foo".to_string(),
            original: Span::new(20, 23, 2, 9),
            duplicate: Span::new(70, 73, 5, 13),
        }
    }

    #[test]
    fn test_diagnostic_code() {
        let diag = Diagnostic::from_desugar_error(&duplicate_foo(), 0);
        assert_eq!(diag.code(), Some(&ErrorCode("E4003")));
        assert_eq!(diag.inner().severity, Severity::Error);
    }

    #[test]
    fn test_duplicate_field_has_secondary_label() {
        let diag = Diagnostic::from_desugar_error(&duplicate_foo(), 0);
        let styles: Vec<LabelStyle> = diag.inner().labels.iter().map(|l| l.style).collect();
        assert_eq!(styles, vec![LabelStyle::Primary, LabelStyle::Secondary]);
    }

    #[test]
    fn test_external_original_becomes_note() {
        let error = DesugarError::DuplicateField {
            name: "id".to_string(),
            class: "Entity".to_string(),
            original: Span::default(),
            duplicate: Span::new(10, 12, 1, 11),
        };
        let diag = Diagnostic::from_desugar_error(&error, 0);
        assert_eq!(diag.inner().labels.len(), 1);
        assert!(diag.inner().notes.iter().any(|n| n.contains("Entity")));
    }

    #[test]
    fn test_render_against_source() {
        let files = create_files("unit.hx", SOURCE);
        let diag = Diagnostic::from_desugar_error(&duplicate_foo(), 0);

        let mut out = NoColor::new(Vec::new());
        diag.emit_to(&mut out, &files).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();

        assert!(text.contains("error[E4003]"));
        assert!(text.contains("Duplicate field 'foo': already declared in class 'Foo'"));
        assert!(text.contains("'foo' first declared here"));
    }

    #[test]
    fn test_json_labels() {
        let files = create_files("unit.hx", SOURCE);
        let diag = Diagnostic::from_desugar_error(&duplicate_foo(), 0);
        let json: serde_json::Value = serde_json::from_str(&diag.to_json(&files).unwrap()).unwrap();

        assert_eq!(json["code"], "E4003");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["labels"][0]["style"], "primary");
        assert_eq!(json["labels"][0]["start_line"], 5);
        assert_eq!(json["labels"][1]["start_line"], 2);
    }

    #[test]
    fn test_json_without_source() {
        let error = DesugarError::InvalidFieldContext {
            name: "x".to_string(),
            context: FieldContext::Function { name: "make".to_string() },
            span: Span::new(14, 19, 1, 15),
        };
        let json = JsonDiagnostic::from_error(&error, "unit.json");
        assert_eq!(json.code.as_deref(), Some("E4001"));
        assert_eq!(json.labels.len(), 1);
        assert_eq!(json.labels[0].start_column, 15);
        assert_eq!(json.labels[0].end_column, 20);
        assert!(json.notes[0].starts_with("help:"));
    }

    #[test]
    fn test_json_without_source_inverted_span() {
        let error = DesugarError::StaticArgumentField {
            name: "x".to_string(),
            span: Span::new(30, 24, 3, 9),
        };
        let json = JsonDiagnostic::from_error(&error, "unit.json");
        assert_eq!(json.labels[0].start_column, 9);
        assert_eq!(json.labels[0].end_column, 9);
    }

    #[test]
    fn test_duplicate_class_labels() {
        let error = DesugarError::DuplicateClass {
            class: "Foo".to_string(),
            original: Span::new(6, 9, 1, 7),
            duplicate: Span::new(38, 41, 4, 7),
        };
        let diag = Diagnostic::from_desugar_error(&error, 0);
        assert_eq!(diag.code(), Some(&ErrorCode("E4008")));
        let styles: Vec<LabelStyle> = diag.inner().labels.iter().map(|l| l.style).collect();
        assert_eq!(styles, vec![LabelStyle::Primary, LabelStyle::Secondary]);
        assert_eq!(error.to_string(), "Class 'Foo' is already declared in this module");
    }
}
