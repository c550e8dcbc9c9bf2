//! # pkgkit Logging Initialization
//!
//! File: cli/src/core/logging.rs
//!
//! ## Overview
//!
//! Installs the process-wide `tracing` subscriber used by every helper in the
//! library. Callers pick a minimum level by name and optionally a log file;
//! records always go to stderr and, when a file is given, are tee'd into it.
//!
//! Level names, lowest first:
//!
//! | Name      | tracing level |
//! |-----------|---------------|
//! | `DEBUG`   | `TRACE`       |
//! | `VERBOSE` | `DEBUG`       |
//! | `INFO`    | `INFO`        |
//! | `WARN`    | `WARN`        |
//! | `ERROR`   | `ERROR`       |
//!
//! Helpers log their `VERBOSE` chatter (shell commands, their output) with
//! `tracing::debug!`. An empty level name means `WARN`. As with the rest of
//! the CLI, `RUST_LOG` takes precedence over the configured level when set.
//!
use crate::core::error::{Result, UtilError};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Minimum severity accepted by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::TRACE,
            LogLevel::Verbose => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl FromStr for LogLevel {
    type Err = UtilError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "" | "WARN" => Ok(LogLevel::Warn),
            "DEBUG" => Ok(LogLevel::Debug),
            "VERBOSE" => Ok(LogLevel::Verbose),
            "INFO" => Ok(LogLevel::Info),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(UtilError::new(format!(
                "Unknown log level '{}'. Expected one of DEBUG, VERBOSE, INFO, WARN, ERROR.",
                other
            ))),
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails when `level` is not a recognised name, when `log_file` cannot be
/// created, or when a global subscriber is already installed.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let level: LogLevel = level.parse()?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact();

    let installed = match log_file {
        None => builder.with_writer(std::io::stderr).try_init(),
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                UtilError::with_source(
                    format!("Failed to create log file {}: {}", path.display(), e),
                    e,
                )
            })?;
            builder
                .with_ansi(false)
                .with_writer(std::io::stderr.and(Arc::new(file)))
                .try_init()
        }
    };
    installed.map_err(|e| UtilError::new(format!("Failed to install logger: {}", e)))?;

    tracing::debug!("Logging initialised at {}", level.as_str());
    Ok(())
}
