//! Log subscriber setup
//!
//! Events go to stderr so they never mix with emitted trees on stdout.

use clap::ValueEnum;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Default filter when RUST_LOG is unset.
const DEFAULT_DIRECTIVE: &str = "warn";

pub fn init_logging(format: LogFormat, trace: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, EnvFilter};

    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
    };

    match format {
        LogFormat::Json => {
            let subscriber = fmt::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .json()
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
        LogFormat::Text => {
            let subscriber = fmt::fmt()
                .with_env_filter(filter)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact()
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        }
    }
}
