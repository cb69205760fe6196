use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{runtime_dir, LogLevel};

static INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    File,
    Stderr,
}

impl LogMode {
    /// A level given on the command line always goes to stderr.
    pub fn select(log_file: bool, cli_override: Option<LogLevel>) -> Self {
        if log_file && cli_override.is_none() {
            LogMode::File
        } else {
            LogMode::Stderr
        }
    }
}

pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Install the global subscriber once. Returns a guard that must live until
/// exit when logging to a file.
pub fn init(level: LogLevel, mode: LogMode, cli_override: Option<LogLevel>) -> LogGuard {
    let mut guard = None;

    INIT.get_or_init(|| {
        let Some(level) = cli_override.unwrap_or(level).as_tracing_level() else {
            return;
        };

        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        let layer = fmt::layer()
            .with_timer(UtcTime::rfc_3339())
            .with_target(false);

        match mode {
            LogMode::File => {
                let Some(appender) = file_appender() else {
                    return;
                };
                let (writer, worker) = tracing_appender::non_blocking(appender);
                guard = Some(worker);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.with_writer(writer).with_ansi(false))
                    .init();
            }
            LogMode::Stderr => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.with_writer(std::io::stderr))
                    .init();
            }
        }
    });

    LogGuard { _guard: guard }
}

/// Daily `battline.*.log` files under the runtime dir, last week kept.
fn file_appender() -> Option<RollingFileAppender> {
    let log_dir = runtime_dir();
    std::fs::create_dir_all(&log_dir).ok()?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("battline")
        .filename_suffix("log")
        .max_log_files(7)
        .build(&log_dir)
        .ok()
}
