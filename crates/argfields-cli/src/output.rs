//! Colored terminal output.
//!
//! Uses `termcolor` for cross-platform colored terminal output.
//! Respects `NO_COLOR` environment variable and `--color` flag.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match flag {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Styled writer over stdout or stderr.
pub struct StyledOutput {
    stream: StandardStream,
}

impl StyledOutput {
    pub fn stdout(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(choice),
        }
    }

    pub fn stderr(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stderr(choice),
        }
    }

    /// Write text with a specific color and style.
    pub fn write_styled(&mut self, text: &str, color: Option<Color>, bold: bool) {
        write_styled(&mut self.stream, text, color, bold);
    }

    /// Green bold text.
    pub fn success(&mut self, text: &str) {
        self.write_styled(text, Some(Color::Green), true);
    }

    /// Plain text (no color).
    pub fn plain(&mut self, text: &str) {
        let _ = write!(self.stream, "{}", text);
    }

    pub fn newline(&mut self) {
        let _ = writeln!(self.stream);
    }

    pub fn writer(&mut self) -> &mut dyn WriteColor {
        &mut self.stream
    }
}

/// One-line error: `file:line:column: error[CODE]: message`
pub fn write_error_line(out: &mut dyn WriteColor, location: &str, code: &str, message: &str) {
    write_styled(out, location, None, true);
    let _ = write!(out, ": ");
    write_styled(out, &format!("error[{}]", code), Some(Color::Red), true);
    let _ = writeln!(out, ": {}", message);
}

fn write_styled(out: &mut dyn WriteColor, text: &str, color: Option<Color>, bold: bool) {
    let mut spec = ColorSpec::new();
    spec.set_fg(color).set_bold(bold);
    let _ = out.set_color(&spec);
    let _ = write!(out, "{}", text);
    let _ = out.reset();
}
