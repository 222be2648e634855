//! # promptwright-logging
//!
//! Logging for the promptwright wizard.
//!
//! ## Key Types
//!
//! - [`Logger`] - Wizard event logging to the console and an optional JSONL file
//! - [`WizardEvent`] - Log event types
//! - [`LogFormat`] - Output formats (Pretty, JSON, Compact)
//!
//! Diagnostics from the core crate go through `tracing`; [`init_tracing`]
//! wires up the subscriber.

mod events;

pub use events::{preview, LogFormat, Logger, WizardEvent};

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name used for the tracing log inside the log directory
pub const TRACING_LOG_FILE: &str = "promptwright.log";

/// Initialize tracing for the application.
///
/// `RUST_LOG` takes precedence over `level`. When `log_dir` is given, a JSON
/// copy of every record is appended to [`TRACING_LOG_FILE`] in that
/// directory; keep the returned guard alive until exit so it gets flushed.
pub fn init_tracing(level: &str, format: LogFormat, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, TRACING_LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Pretty | LogFormat::Compact => {
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    guard
}
