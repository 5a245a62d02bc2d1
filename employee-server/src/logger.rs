//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty) and production (JSON,
//! optionally written to a daily-rolling file).

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogTarget<'a> {
    Stdout,
    File(&'a Path),
    /// `LOG_DIR` is set but is not a directory; falls back to stdout
    MissingDir(&'a str),
}

fn log_target(config: &Config) -> LogTarget<'_> {
    match config.log_dir.as_deref() {
        None => LogTarget::Stdout,
        Some(dir) if Path::new(dir).is_dir() => LogTarget::File(Path::new(dir)),
        Some(dir) => LogTarget::MissingDir(dir),
    }
}

/// Initialize the global subscriber from the server configuration
///
/// `RUST_LOG` wins over `LOG_LEVEL` when set.
pub fn init_logger(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "employee_server={level},shared={level},tower_http={level}",
            level = config.log_level
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let target = log_target(config);
    match target {
        LogTarget::File(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "employee-server");
            let builder = builder.with_writer(file_appender).with_ansi(false);
            if config.log_json {
                builder.json().init();
            } else {
                builder.init();
            }
        }
        LogTarget::Stdout | LogTarget::MissingDir(_) => {
            if config.log_json {
                builder.json().init();
            } else {
                builder.init();
            }
        }
    }

    if let LogTarget::MissingDir(dir) = target {
        tracing::warn!(log_dir = %dir, "LOG_DIR is not a directory, logging to stdout");
    }
}
